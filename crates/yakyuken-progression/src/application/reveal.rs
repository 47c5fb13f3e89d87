//! Stage reveal choreography.
//!
//! Swapping the stage image is a fixed list of steps. Each step is one
//! suspension point at most, so a per-step policy (cancel, timeout) can be
//! attached without reshaping the sequence.

use tracing::{debug, warn};
use yakyuken_core::config::Timing;
use yakyuken_core::error::GameError;
use yakyuken_core::presenter::Presenter;
use yakyuken_core::timer::Timer;

/// One step of a stage swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStep {
    /// Hide the current image and wait for the fade to finish.
    FadeOut,
    /// Point the image at the new stage's asset.
    SwapAsset,
    /// Wait for the new asset to load, bounded by the load timeout.
    AwaitLoad,
    /// Enter the emphasized display.
    Emphasize,
    /// Show the image and wait for the fade to finish.
    FadeIn,
    /// Keep the emphasized display up.
    Hold,
    /// Return to the normal display.
    Restore,
}

/// The steps of a stage swap, in execution order.
pub const SWAP_SEQUENCE: [SwapStep; 7] = [
    SwapStep::FadeOut,
    SwapStep::SwapAsset,
    SwapStep::AwaitLoad,
    SwapStep::Emphasize,
    SwapStep::FadeIn,
    SwapStep::Hold,
    SwapStep::Restore,
];

/// Performs the full swap to `stage`.
///
/// A load failure or timeout is logged and the swap goes on with whatever
/// is displayed. Any other failure stops the swap, puts the image back in
/// its normal visible state and is returned.
///
/// # Errors
///
/// Returns the error of the step that failed.
pub async fn swap_stage_visual(
    stage: u32,
    timing: &Timing,
    presenter: &dyn Presenter,
    timer: &dyn Timer,
) -> Result<(), GameError> {
    for step in SWAP_SEQUENCE {
        debug!(stage, ?step, "stage swap step");
        if let Err(err) = run_step(step, stage, timing, presenter, timer).await {
            presenter.set_emphasized(false);
            presenter.set_visibility(true);
            return Err(err);
        }
    }
    Ok(())
}

async fn run_step(
    step: SwapStep,
    stage: u32,
    timing: &Timing,
    presenter: &dyn Presenter,
    timer: &dyn Timer,
) -> Result<(), GameError> {
    match step {
        SwapStep::FadeOut => {
            presenter.set_visibility(false);
            timer.sleep(timing.fade_out()).await;
        }
        SwapStep::SwapAsset => presenter.show_stage_asset(stage)?,
        SwapStep::AwaitLoad => {
            if let Err(err) = await_load_bounded(timing, presenter, timer).await {
                warn!(stage, error = %err, "stage image not loaded, continuing");
            }
        }
        SwapStep::Emphasize => presenter.set_emphasized(true),
        SwapStep::FadeIn => {
            presenter.set_visibility(true);
            timer.sleep(timing.fade_in()).await;
        }
        SwapStep::Hold => timer.sleep(timing.emphasis_hold()).await,
        SwapStep::Restore => presenter.set_emphasized(false),
    }
    Ok(())
}

async fn await_load_bounded(
    timing: &Timing,
    presenter: &dyn Presenter,
    timer: &dyn Timer,
) -> Result<(), GameError> {
    let limit = timing.load_timeout();
    tokio::select! {
        biased;
        loaded = presenter.await_asset_load() => loaded,
        () = timer.sleep(limit) => Err(GameError::AssetTimeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use yakyuken_test_support::{InstantTimer, PresenterCall, RecordingPresenter};

    #[tokio::test]
    async fn test_swap_runs_steps_in_order() {
        let presenter = RecordingPresenter::new();
        let timer = InstantTimer::new();

        swap_stage_visual(2, &Timing::default(), &presenter, &timer)
            .await
            .unwrap();

        assert_eq!(
            presenter.calls(),
            vec![
                PresenterCall::SetVisibility(false),
                PresenterCall::ShowStageAsset(2),
                PresenterCall::AwaitAssetLoad,
                PresenterCall::SetEmphasized(true),
                PresenterCall::SetVisibility(true),
                PresenterCall::SetEmphasized(false),
            ]
        );
        assert_eq!(
            timer.requested(),
            vec![
                Duration::from_millis(1000),
                Duration::from_millis(1000),
                Duration::from_millis(5000),
            ]
        );
    }

    #[tokio::test]
    async fn test_stalled_load_is_bounded_by_timeout() {
        let presenter = RecordingPresenter::stalled_load();
        let timer = InstantTimer::new();

        let result = swap_stage_visual(1, &Timing::default(), &presenter, &timer).await;

        assert!(result.is_ok());
        assert_eq!(
            timer.requested(),
            vec![
                Duration::from_millis(1000),
                Duration::from_millis(5000),
                Duration::from_millis(1000),
                Duration::from_millis(5000),
            ]
        );
        assert_eq!(presenter.calls().last(), Some(&PresenterCall::SetEmphasized(false)));
    }

    #[tokio::test]
    async fn test_failed_load_still_completes_swap() {
        let presenter = RecordingPresenter::failing_load();
        let timer = InstantTimer::new();

        let result = swap_stage_visual(1, &Timing::default(), &presenter, &timer).await;

        assert!(result.is_ok());
        assert!(presenter.calls().contains(&PresenterCall::SetEmphasized(true)));
    }

    #[tokio::test]
    async fn test_failed_asset_swap_restores_visible_image() {
        let presenter = RecordingPresenter::failing_swap();
        let timer = InstantTimer::new();

        let result = swap_stage_visual(1, &Timing::default(), &presenter, &timer).await;

        assert!(matches!(result, Err(GameError::Presentation(_))));
        assert_eq!(
            presenter.calls(),
            vec![
                PresenterCall::SetVisibility(false),
                PresenterCall::ShowStageAsset(1),
                PresenterCall::SetEmphasized(false),
                PresenterCall::SetVisibility(true),
            ]
        );
        assert_eq!(timer.requested(), vec![Duration::from_millis(1000)]);
    }
}
