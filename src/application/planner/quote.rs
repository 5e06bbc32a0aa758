//! TripQuote - priced read model of a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BoardType, Money, SessionId, TripDate};
use crate::domain::pricing::DayBreakdown;

/// Per-day breakdown, grand total and booking hints for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripQuote {
    pub session_id: SessionId,
    pub destination: String,
    pub board_type: BoardType,
    pub days: Vec<DayBreakdown>,
    pub grand_total: Money,
    /// Days with no hotel selected; a hint, not an error.
    pub missing_hotel: Vec<TripDate>,
}

impl TripQuote {
    /// Returns true once every day has a hotel.
    pub fn is_fully_booked(&self) -> bool {
        self.missing_hotel.is_empty()
    }
}
