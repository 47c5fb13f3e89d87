mod common;

use std::time::Duration;

use yakyuken_progression::domain::state::Phase;
use yakyuken_rules::domain::choice::Choice;
use yakyuken_session::application::driver::{SessionDriver, input_channel};
use yakyuken_session::domain::commands::PlayerCommand;
use yakyuken_terminal::input::forward_lines;

const SCISSORS: u32 = 2;

#[tokio::test]
async fn test_initialize_renders_title_from_name_file() {
    let dir = common::asset_dir("title");
    let mut t = common::build_session(&dir, vec![]);

    t.session.initialize().await;

    assert_eq!(t.session.display_name(), "Hanako");
    let screen = t.screen.text();
    assert!(screen.starts_with("== Hanako-chan Yakyuken ==\n"));
    assert!(screen.contains("> Choose rock, paper, or scissors"));
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_five_wins_render_clear_banner_and_dismiss_resets() {
    let dir = common::asset_dir("clear");
    let mut t = common::build_session(&dir, vec![SCISSORS; 5]);
    t.session.initialize().await;

    for _ in 0..5 {
        t.session.handle(PlayerCommand::choose(Choice::Rock)).await;
    }

    assert_eq!(t.session.state().phase(), Phase::Cleared);
    let screen = t.screen.text();
    assert!(screen.contains("*** GAME CLEAR ***"));
    assert!(screen.contains("stage-5.png?t="));
    assert!(screen.contains("progress *****@"));

    t.session.handle(PlayerCommand::dismiss()).await;

    assert_eq!(t.session.state().current_stage(), 0);
    assert_eq!(t.session.state().phase(), Phase::Idle);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_missing_assets_do_not_block_play() {
    let dir = common::asset_dir("missing");
    std::fs::remove_file(dir.join("stage-1.png")).unwrap();
    std::fs::remove_file(dir.join("lose.wav")).unwrap();
    let mut t = common::build_session(&dir, vec![SCISSORS]);
    t.session.initialize().await;

    t.session.handle(PlayerCommand::choose(Choice::Rock)).await;

    assert_eq!(t.session.state().current_stage(), 1);
    assert_eq!(t.session.state().phase(), Phase::Idle);
    // The missing lose cue is skipped, the stage cue plays, and the failed
    // image load does not wait for the load timeout.
    assert_eq!(
        t.timer.requested(),
        [3000, 1500, 1000, 1000, 5000].map(Duration::from_millis)
    );
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn test_typed_lines_drive_the_session() {
    let dir = common::asset_dir("lines");
    let mut t = common::build_session(&dir, vec![SCISSORS]);
    t.session.initialize().await;
    let (handle, commands) = input_channel(4);

    let input: &[u8] = b"rock\n";
    let accepted = forward_lines(input, handle).await.unwrap();
    let outcome = SessionDriver::new(t.session, commands).run().await;

    assert_eq!(accepted, 1);
    assert_eq!(outcome.dropped_inputs, 0);
    assert_eq!(outcome.session.state().current_stage(), 1);
    assert!(t.screen.text().contains("> You Win!"));
    std::fs::remove_dir_all(dir).unwrap();
}
