//! The three hands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use yakyuken_core::rng::DeterministicRng;

/// A hand a player can throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

/// Returned when a string is not one of the stable choice identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown choice: {0:?}")]
pub struct ParseChoiceError(pub String);

impl Choice {
    /// Every hand, in identifier order.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Returns the stable identifier of this hand.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// Returns `true` if this hand defeats `other`.
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }

    /// Picks a hand uniformly at random.
    pub fn random(rng: &mut dyn DeterministicRng) -> Self {
        match rng.next_u32_range(0, 2) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(ParseChoiceError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yakyuken_test_support::{MockRng, SequenceRng};

    #[test]
    fn test_identifiers_round_trip_through_from_str() {
        for choice in Choice::ALL {
            assert_eq!(choice.as_str().parse::<Choice>(), Ok(choice));
        }
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(" Paper\n".parse::<Choice>(), Ok(Choice::Paper));
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let err = "lizard".parse::<Choice>().unwrap_err();
        assert_eq!(err.to_string(), "unknown choice: \"lizard\"");
    }

    #[test]
    fn test_each_hand_beats_exactly_one_other() {
        for choice in Choice::ALL {
            let wins = Choice::ALL.iter().filter(|&&other| choice.beats(other)).count();
            assert_eq!(wins, 1, "{choice} should beat exactly one hand");
            assert!(!choice.beats(choice));
        }
    }

    #[test]
    fn test_random_maps_rng_indices_to_hands() {
        let mut rng = SequenceRng::new(vec![0, 1, 2]);
        assert_eq!(Choice::random(&mut rng), Choice::Rock);
        assert_eq!(Choice::random(&mut rng), Choice::Paper);
        assert_eq!(Choice::random(&mut rng), Choice::Scissors);
    }

    #[test]
    fn test_random_with_mock_rng_is_rock() {
        assert_eq!(Choice::random(&mut MockRng), Choice::Rock);
    }
}
