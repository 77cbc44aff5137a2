//! Pitch position categories.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position category of a player, from the bootstrap `element_type` code.
///
/// | code | position   |
/// |------|------------|
/// | 1    | goalkeeper |
/// | 2    | defender   |
/// | 3    | midfielder |
/// | 4    | forward    |
///
/// # Examples
///
/// ```rust
/// use fpl_stats::Position;
///
/// assert_eq!(Position::try_from(3).unwrap(), Position::Midfielder);
/// assert_eq!(Position::Midfielder.to_string(), "midfielder");
/// assert!(Position::try_from(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Map an upstream `element_type` code to a position. No default branch.
    pub fn try_from(code: u8) -> Result<Self, FplError> {
        match code {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::UnknownPositionCode { code }),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_position_code_mappings() {
        assert_eq!(Position::try_from(1).unwrap(), Position::Goalkeeper);
        assert_eq!(Position::try_from(2).unwrap(), Position::Defender);
        assert_eq!(Position::try_from(3).unwrap(), Position::Midfielder);
        assert_eq!(Position::try_from(4).unwrap(), Position::Forward);

        for code in [0u8, 5, 99] {
            match Position::try_from(code) {
                Err(FplError::UnknownPositionCode { code: c }) => assert_eq!(c, code),
                other => panic!("Expected UnknownPositionCode, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_code_round_trips_through_try_from() {
        for p in [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward,
        ] {
            assert_eq!(Position::try_from(p.code()).unwrap(), p);
        }
    }

    #[test]
    fn test_position_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Position::Goalkeeper).unwrap(),
            "\"goalkeeper\""
        );
        assert_eq!(Position::Forward.to_string(), "forward");
    }
}
