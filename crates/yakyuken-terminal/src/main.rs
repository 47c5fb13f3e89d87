//! Yakyuken terminal game entry point.

use std::error::Error;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use yakyuken_core::assets::AssetCatalog;
use yakyuken_core::clock::SystemClock;
use yakyuken_core::rng::{DeterministicRng, StdRngSource};
use yakyuken_core::timer::TokioTimer;
use yakyuken_session::application::driver::{DEFAULT_INPUT_CAPACITY, SessionDriver, input_channel};
use yakyuken_session::application::lifecycle::{Session, SessionDeps};
use yakyuken_terminal::config::AppConfig;
use yakyuken_terminal::input::forward_lines;
use yakyuken_terminal::name_file::FileNameSource;
use yakyuken_terminal::presenter::TerminalPresenter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they do not interleave with the game screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Yakyuken");

    // Read configuration from environment.
    let app_config = AppConfig::from_env()?;
    let game_config = app_config.load_game_config().await?;

    let clock = Arc::new(SystemClock);
    let timer = Arc::new(TokioTimer);
    let presenter = Arc::new(TerminalPresenter::stdout(
        AssetCatalog::new(&app_config.asset_dir, game_config.assets.clone()),
        clock.clone(),
        timer.clone(),
        app_config.cue_length(),
    ));
    let rng: Box<dyn DeterministicRng> = match app_config.seed {
        Some(seed) => Box::new(StdRngSource::seeded(seed)),
        None => Box::new(StdRngSource::from_os()),
    };

    let mut session = Session::new(
        &game_config,
        SessionDeps {
            presenter,
            timer,
            clock,
            rng,
            name_source: Arc::new(FileNameSource::new(&app_config.name_file)),
        },
    );
    session.initialize().await;

    let (handle, commands) = input_channel(DEFAULT_INPUT_CAPACITY);
    let reader = tokio::spawn(forward_lines(BufReader::new(tokio::io::stdin()), handle));
    let outcome = SessionDriver::new(session, commands).run().await;

    let accepted = reader.await??;
    let state = outcome.session.state();
    tracing::info!(
        accepted,
        dropped = outcome.dropped_inputs,
        stage = state.current_stage(),
        lose_count = state.lose_count(),
        "Session ended"
    );

    Ok(())
}
