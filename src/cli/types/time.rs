//! Gameweek numbers and inclusive gameweek windows.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek numbers (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub fn new(gw: u16) -> Self {
        Self(gw)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Gameweeks `1..=self`, in order.
    pub fn season_to_date(self) -> impl Iterator<Item = Gameweek> {
        (1..=self.0).map(Gameweek)
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Inclusive gameweek range `[start, end]`.
///
/// Construction rejects gameweek 0 and reversed bounds, so every window that
/// exists is non-empty.
///
/// # Examples
///
/// ```rust
/// use fpl_stats::{Gameweek, GameweekWindow};
///
/// let month = GameweekWindow::new(Gameweek::new(5), Gameweek::new(8)).unwrap();
/// assert!(month.contains(Gameweek::new(5)));
/// assert!(month.contains(Gameweek::new(8)));
/// assert!(!month.contains(Gameweek::new(9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameweekWindow {
    start: Gameweek,
    end: Gameweek,
}

impl GameweekWindow {
    pub fn new(start: Gameweek, end: Gameweek) -> Result<Self> {
        if start.0 == 0 || start > end {
            return Err(FplError::InvalidWindow {
                start: start.0,
                end: end.0,
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Gameweek {
        self.start
    }

    pub fn end(&self) -> Gameweek {
        self.end
    }

    pub fn contains(&self, gw: Gameweek) -> bool {
        self.start <= gw && gw <= self.end
    }
}

impl fmt::Display for GameweekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
