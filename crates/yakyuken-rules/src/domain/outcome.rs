//! Round resolution.

use serde::{Deserialize, Serialize};
use yakyuken_core::presenter::{Cue, Expression};

use super::choice::Choice;

/// Result of one round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's hand beats the computer's.
    PlayerWin,
    /// The computer's hand beats the player's.
    ComputerWin,
    /// Both threw the same hand.
    Draw,
}

impl Outcome {
    /// The character's expression for this outcome.
    ///
    /// The character is the computer, so a player win shows the losing face.
    #[must_use]
    pub const fn expression(self) -> Expression {
        match self {
            Self::PlayerWin => Expression::Lose,
            Self::ComputerWin => Expression::Win,
            Self::Draw => Expression::Normal,
        }
    }

    /// The cue the character voices for this outcome.
    #[must_use]
    pub const fn cue(self) -> Cue {
        match self {
            Self::PlayerWin => Cue::Lose,
            Self::ComputerWin => Cue::Win,
            Self::Draw => Cue::Draw,
        }
    }
}

/// Resolves a round.
///
/// Equal hands draw; otherwise the hand that beats the other under the
/// rock > scissors > paper > rock cycle wins.
#[must_use]
pub const fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player.beats(computer) {
        Outcome::PlayerWin
    } else if computer.beats(player) {
        Outcome::ComputerWin
    } else {
        Outcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_hands_draw() {
        for choice in Choice::ALL {
            assert_eq!(resolve(choice, choice), Outcome::Draw);
        }
    }

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::PlayerWin);
        assert_eq!(resolve(Choice::Scissors, Choice::Rock), Outcome::ComputerWin);
    }

    #[test]
    fn test_scissors_beats_paper() {
        assert_eq!(resolve(Choice::Scissors, Choice::Paper), Outcome::PlayerWin);
        assert_eq!(resolve(Choice::Paper, Choice::Scissors), Outcome::ComputerWin);
    }

    #[test]
    fn test_paper_beats_rock() {
        assert_eq!(resolve(Choice::Paper, Choice::Rock), Outcome::PlayerWin);
        assert_eq!(resolve(Choice::Rock, Choice::Paper), Outcome::ComputerWin);
    }

    #[test]
    fn test_resolution_is_antisymmetric_for_all_pairs() {
        for player in Choice::ALL {
            for computer in Choice::ALL {
                let forward = resolve(player, computer);
                let backward = resolve(computer, player);
                let expected = match forward {
                    Outcome::PlayerWin => Outcome::ComputerWin,
                    Outcome::ComputerWin => Outcome::PlayerWin,
                    Outcome::Draw => Outcome::Draw,
                };
                assert_eq!(backward, expected, "{player} vs {computer}");
                assert_eq!(resolve(player, computer), forward);
            }
        }
    }

    #[test]
    fn test_player_win_shows_losing_character() {
        assert_eq!(Outcome::PlayerWin.expression(), Expression::Lose);
        assert_eq!(Outcome::PlayerWin.cue(), Cue::Lose);
        assert_eq!(Outcome::ComputerWin.expression(), Expression::Win);
        assert_eq!(Outcome::ComputerWin.cue(), Cue::Win);
        assert_eq!(Outcome::Draw.expression(), Expression::Normal);
        assert_eq!(Outcome::Draw.cue(), Cue::Draw);
    }
}
