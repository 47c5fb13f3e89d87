//! Keyboard input for the terminal front-end.
//!
//! Every line read from the terminal becomes at most one command on the
//! session's input handle. A blank line dismisses the clear screen.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};
use yakyuken_rules::domain::choice::Choice;
use yakyuken_session::application::driver::InputHandle;
use yakyuken_session::domain::commands::{CommandKind, PlayerCommand};

/// What one line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    /// Forward a command to the session.
    Command(CommandKind),
    /// Stop reading input.
    Quit,
    /// Not a recognized input.
    Unknown,
}

/// Interprets one line of terminal input.
#[must_use]
pub fn parse_line(line: &str) -> LineInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineInput::Command(CommandKind::Dismiss);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => LineInput::Quit,
        "r" => LineInput::Command(CommandKind::Choose(Choice::Rock)),
        "p" => LineInput::Command(CommandKind::Choose(Choice::Paper)),
        "s" => LineInput::Command(CommandKind::Choose(Choice::Scissors)),
        other => other
            .parse::<Choice>()
            .map_or(LineInput::Unknown, |choice| {
                LineInput::Command(CommandKind::Choose(choice))
            }),
    }
}

/// Reads lines from `reader` and forwards them to `handle` until end of
/// input or a quit request. Returns the number of commands accepted.
///
/// # Errors
///
/// Returns the underlying I/O error if reading fails.
pub async fn forward_lines<R>(reader: R, handle: InputHandle) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut accepted = 0;
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            LineInput::Command(kind) => {
                if handle.send(PlayerCommand::new(kind)) {
                    accepted += 1;
                }
            }
            LineInput::Quit => {
                debug!("quit requested");
                break;
            }
            LineInput::Unknown => warn!(input = %line.trim(), "unrecognized input"),
        }
    }
    Ok(accepted)
}
