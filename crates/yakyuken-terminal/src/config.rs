//! Environment configuration for the terminal front-end.

use std::path::PathBuf;
use std::time::Duration;

use yakyuken_core::config::GameConfig;

use crate::error::AppError;

const DEFAULT_ASSET_DIR: &str = "assets";
const DEFAULT_NAME_FILE: &str = "name.txt";
const DEFAULT_CUE_MS: u64 = 1500;

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the stage images and cues are resolved against.
    pub asset_dir: PathBuf,
    /// File holding the display name.
    pub name_file: PathBuf,
    /// Optional YAML file overriding the game configuration.
    pub game_config: Option<PathBuf>,
    /// Multiplier applied to every duration.
    pub time_scale: f64,
    /// How long a cue plays, before scaling.
    pub cue_ms: u64,
    /// Fixed RNG seed, for reproducible sessions.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let time_scale = match lookup("YAKYUKEN_TIME_SCALE") {
            Some(raw) => {
                let scale: f64 = raw.parse().map_err(|e| {
                    AppError::Config(format!("YAKYUKEN_TIME_SCALE must be a number: {e}"))
                })?;
                if !scale.is_finite() || scale < 0.0 {
                    return Err(AppError::Config(format!(
                        "YAKYUKEN_TIME_SCALE must be finite and non-negative, got {scale}"
                    )));
                }
                scale
            }
            None => 1.0,
        };
        let cue_ms = match lookup("YAKYUKEN_CUE_MS") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("YAKYUKEN_CUE_MS must be a valid u64: {e}")))?,
            None => DEFAULT_CUE_MS,
        };
        let seed = lookup("YAKYUKEN_SEED")
            .map(|raw| {
                raw.parse()
                    .map_err(|e| AppError::Config(format!("YAKYUKEN_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            asset_dir: lookup("YAKYUKEN_ASSET_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR), PathBuf::from),
            name_file: lookup("YAKYUKEN_NAME_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_NAME_FILE), PathBuf::from),
            game_config: lookup("YAKYUKEN_CONFIG").map(PathBuf::from),
            time_scale,
            cue_ms,
            seed,
        })
    }

    /// Playback length of one cue after scaling.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn cue_length(&self) -> Duration {
        Duration::from_millis((self.cue_ms as f64 * self.time_scale).round() as u64)
    }

    /// Loads the game configuration, applying the time scale.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the YAML file cannot be read and
    /// `AppError::Game` if it is invalid.
    pub async fn load_game_config(&self) -> Result<GameConfig, AppError> {
        let mut config = match &self.game_config {
            Some(path) => {
                let source = tokio::fs::read_to_string(path).await?;
                GameConfig::from_yaml_str(&source)?
            }
            None => GameConfig::default(),
        };
        config.timing = config.timing.scaled(self.time_scale);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert_eq!(config.name_file, PathBuf::from("name.txt"));
        assert_eq!(config.game_config, None);
        assert!((config.time_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.cue_length(), Duration::from_millis(1500));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = from_pairs(&[
            ("YAKYUKEN_ASSET_DIR", "/srv/yakyuken"),
            ("YAKYUKEN_NAME_FILE", "/srv/name.txt"),
            ("YAKYUKEN_CONFIG", "game.yaml"),
            ("YAKYUKEN_TIME_SCALE", "0.1"),
            ("YAKYUKEN_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.asset_dir, PathBuf::from("/srv/yakyuken"));
        assert_eq!(config.name_file, PathBuf::from("/srv/name.txt"));
        assert_eq!(config.game_config, Some(PathBuf::from("game.yaml")));
        assert_eq!(config.cue_length(), Duration::from_millis(150));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_time_scale_is_config_error() {
        for raw in ["fast", "-1", "inf", "NaN"] {
            let result = from_pairs(&[("YAKYUKEN_TIME_SCALE", raw)]);
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_seed_is_config_error() {
        let result = from_pairs(&[("YAKYUKEN_SEED", "abc")]);
        match result.unwrap_err() {
            AppError::Config(msg) => assert!(msg.starts_with("YAKYUKEN_SEED must be a valid u64")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_game_config_applies_time_scale() {
        let config = from_pairs(&[("YAKYUKEN_TIME_SCALE", "0")]).unwrap();
        let game = config.load_game_config().await.unwrap();
        assert_eq!(game.timing.after_result(), Duration::ZERO);
        assert_eq!(game.max_lose_count, 5);
    }

    #[tokio::test]
    async fn test_missing_game_config_file_is_io_error() {
        let config = from_pairs(&[("YAKYUKEN_CONFIG", "/nonexistent/yakyuken.yaml")]).unwrap();
        let result = config.load_game_config().await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
