//! BoardType enum - the meal policy of a trip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Policy governing which meals are selectable per day.
///
/// - `FullBoard`: lunch and dinner may both be chosen
/// - `HalfBoard`: at most one of lunch or dinner
/// - `NoBoard`: no meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoardType {
    #[default]
    FullBoard,
    HalfBoard,
    NoBoard,
}

impl BoardType {
    /// All board types in display order.
    pub const ALL: [BoardType; 3] = [
        BoardType::FullBoard,
        BoardType::HalfBoard,
        BoardType::NoBoard,
    ];

    /// Returns the short catalog code.
    pub fn code(&self) -> &'static str {
        match self {
            BoardType::FullBoard => "FB",
            BoardType::HalfBoard => "HB",
            BoardType::NoBoard => "NB",
        }
    }

    /// Returns true if any meal may be selected.
    pub fn allows_meals(&self) -> bool {
        !matches!(self, BoardType::NoBoard)
    }

    /// Returns true if lunch and dinner are mutually exclusive.
    pub fn meals_exclusive(&self) -> bool {
        matches!(self, BoardType::HalfBoard)
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoardType::FullBoard => "Full Board",
            BoardType::HalfBoard => "Half Board",
            BoardType::NoBoard => "No Board",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BoardType {
    type Err = ValidationError;

    /// Accepts codes (`FB`) and snake_case names (`full_board`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fb" | "full_board" => Ok(BoardType::FullBoard),
            "hb" | "half_board" => Ok(BoardType::HalfBoard),
            "nb" | "no_board" => Ok(BoardType::NoBoard),
            other => Err(ValidationError::invalid_format(
                "board_type",
                format!("unknown board type '{}'", other),
            )),
        }
    }
}
