//! Trip configuration state.
//!
//! Holds the user's trip-level choices and applies point updates to them.
//! The configuration does not own selections; board-type transitions are
//! reported back to the caller, which applies their side effects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{BoardType, TripDate};

use super::date_range::derive_dates;

/// Trip-level configuration for one planning session.
///
/// # Invariants
///
/// - `days >= 1`
/// - `start_date` is raw input and may be empty or invalid; such values
///   derive an empty date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripConfiguration {
    citizenship: String,
    start_date: String,
    days: u32,
    destination: String,
    board_type: BoardType,
}

/// Names the point-updatable configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripField {
    Citizenship,
    StartDate,
    Days,
    Destination,
}

impl TripField {
    /// Returns true if changing this field can change the derived dates.
    pub fn affects_dates(&self) -> bool {
        matches!(self, TripField::StartDate | TripField::Days)
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TripField::Citizenship => "citizenship",
            TripField::StartDate => "start_date",
            TripField::Days => "days",
            TripField::Destination => "destination",
        };
        write!(f, "{}", s)
    }
}

/// Raw day-count input as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaysInput {
    Number(f64),
    Text(String),
}

impl DaysInput {
    /// Coerces the input to a day count of at least 1.
    ///
    /// Text is read up to its first non-digit after an optional sign and
    /// leading whitespace (`" 7 days"` is 7). Numbers are truncated. Anything
    /// unreadable or below 1 becomes 1; values beyond `u32::MAX` saturate.
    pub fn coerce(&self) -> u32 {
        let parsed = match self {
            DaysInput::Number(n) if n.is_finite() => Some(n.trunc()),
            DaysInput::Number(_) => None,
            DaysInput::Text(text) => parse_leading_integer(text),
        };

        match parsed {
            Some(n) if n >= 1.0 => {
                if n >= f64::from(u32::MAX) {
                    u32::MAX
                } else {
                    n as u32
                }
            }
            _ => 1,
        }
    }
}

impl From<u32> for DaysInput {
    fn from(days: u32) -> Self {
        DaysInput::Number(f64::from(days))
    }
}

impl From<&str> for DaysInput {
    fn from(text: &str) -> Self {
        DaysInput::Text(text.to_string())
    }
}

fn parse_leading_integer(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0.0_f64, |acc, d| acc * 10.0 + f64::from(d));
    Some(if negative { -magnitude } else { magnitude })
}

/// A point update to one configuration field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Citizenship(String),
    StartDate(String),
    Days(DaysInput),
    Destination(String),
}

impl FieldUpdate {
    /// Returns the field this update targets.
    pub fn field(&self) -> TripField {
        match self {
            FieldUpdate::Citizenship(_) => TripField::Citizenship,
            FieldUpdate::StartDate(_) => TripField::StartDate,
            FieldUpdate::Days(_) => TripField::Days,
            FieldUpdate::Destination(_) => TripField::Destination,
        }
    }
}

/// A change of board type that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTransition {
    pub from: BoardType,
    pub to: BoardType,
}

impl BoardTransition {
    /// Returns true if every day's meals must be cleared.
    pub fn clears_meals(&self) -> bool {
        self.to == BoardType::NoBoard
    }
}

impl TripConfiguration {
    /// Creates a configuration. A `days` value of zero is raised to 1.
    pub fn new(
        citizenship: impl Into<String>,
        start_date: impl Into<String>,
        days: u32,
        destination: impl Into<String>,
        board_type: BoardType,
    ) -> Self {
        Self {
            citizenship: citizenship.into(),
            start_date: start_date.into(),
            days: days.max(1),
            destination: destination.into(),
            board_type,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn citizenship(&self) -> &str {
        &self.citizenship
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    /// Derives the trip's calendar days from `start_date` and `days`.
    pub fn derived_dates(&self) -> Vec<TripDate> {
        derive_dates(&self.start_date, self.days)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a point update. Returns true if the stored value changed.
    pub fn update_field(&mut self, update: FieldUpdate) -> bool {
        match update {
            FieldUpdate::Citizenship(value) => replace_if_changed(&mut self.citizenship, value),
            FieldUpdate::StartDate(value) => replace_if_changed(&mut self.start_date, value),
            FieldUpdate::Days(input) => replace_if_changed(&mut self.days, input.coerce()),
            FieldUpdate::Destination(value) => replace_if_changed(&mut self.destination, value),
        }
    }

    /// Switches the board type.
    ///
    /// Selecting the current board type is a no-op and returns `None`, so
    /// repeated selection never re-triggers meal clearing.
    pub fn set_board_type(&mut self, code: BoardType) -> Option<BoardTransition> {
        if code == self.board_type {
            return None;
        }
        let from = std::mem::replace(&mut self.board_type, code);
        Some(BoardTransition { from, to: code })
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
