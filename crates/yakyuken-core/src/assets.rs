//! Resolution of stable asset identifiers to resource locations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::config::AssetConfig;
use crate::error::GameError;
use crate::presenter::Cue;

/// A resolved asset location plus the cache-busting key of this load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Location of the asset.
    pub path: PathBuf,
    /// Milliseconds timestamp appended to the location, so every load
    /// bypasses caches.
    pub cache_key: i64,
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?t={}", self.path.display(), self.cache_key)
    }
}

/// Maps stage indices and cues to files under one asset directory.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    base_dir: PathBuf,
    assets: AssetConfig,
}

impl AssetCatalog {
    /// Creates a catalog rooted at `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, assets: AssetConfig) -> Self {
        Self {
            base_dir: base_dir.into(),
            assets,
        }
    }

    /// Returns the asset directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves the image for `stage`, stamped with the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Resource` if `stage` has no configured image.
    pub fn stage_image(&self, stage: u32, clock: &dyn Clock) -> Result<AssetRef, GameError> {
        let name = self
            .assets
            .stage_images
            .get(stage as usize)
            .ok_or_else(|| GameError::Resource(format!("no stage image for stage {stage}")))?;
        Ok(AssetRef {
            path: self.base_dir.join(name),
            cache_key: clock.now_millis(),
        })
    }

    /// Resolves the audio file for `cue`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Resource` if a stage cue is out of range.
    pub fn cue_path(&self, cue: Cue) -> Result<PathBuf, GameError> {
        let name = match cue {
            Cue::Win => &self.assets.win_cue,
            Cue::Lose => &self.assets.lose_cue,
            Cue::Draw => &self.assets.draw_cue,
            Cue::Stage(stage) => self
                .assets
                .stage_cues
                .get(stage as usize)
                .ok_or_else(|| GameError::Resource(format!("no cue for stage {stage}")))?,
        };
        Ok(self.base_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct Frozen(DateTime<Utc>);

    impl Clock for Frozen {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn catalog() -> AssetCatalog {
        AssetCatalog::new("assets", AssetConfig::default())
    }

    #[test]
    fn test_stage_image_is_cache_busted_with_clock_millis() {
        let clock = Frozen(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        let asset = catalog().stage_image(1, &clock).unwrap();
        assert_eq!(asset.path, PathBuf::from("assets").join("stage-1.png"));
        assert_eq!(asset.cache_key, clock.now_millis());
        assert!(asset.to_string().ends_with(&format!("?t={}", clock.now_millis())));
    }

    #[test]
    fn test_stage_image_out_of_range_is_resource_error() {
        let clock = Frozen(Utc::now());
        let result = catalog().stage_image(6, &clock);
        match result.unwrap_err() {
            GameError::Resource(msg) => assert_eq!(msg, "no stage image for stage 6"),
            other => panic!("expected Resource, got {other:?}"),
        }
    }

    #[test]
    fn test_cue_paths_resolve_outcome_and_stage_cues() {
        let catalog = catalog();
        assert_eq!(
            catalog.cue_path(Cue::Lose).unwrap(),
            PathBuf::from("assets").join("lose.wav")
        );
        assert_eq!(
            catalog.cue_path(Cue::Stage(0)).unwrap(),
            PathBuf::from("assets").join("scene1.wav")
        );
        assert!(catalog.cue_path(Cue::Stage(9)).is_err());
    }
}
