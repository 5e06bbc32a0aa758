//! Trip planning events.
//!
//! Emitted by the planner session for every observable state change:
//! - `FieldUpdated` - A configuration field changed
//! - `BoardTypeChanged` - The board type changed
//! - `DatesResynced` - The selection store was reconciled with new dates
//! - `MealsCleared` - Meals were dropped by a switch to NoBoard
//! - `HotelSelected` - A day's hotel was set or cleared
//! - `MealSelected` - A day's meals changed
//! - `MealEditIgnored` - A meal edit was rejected under NoBoard

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BoardType, HotelId, MealId, TripDate};
use crate::domain::selection::MealSlot;

use super::TripField;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TripEvent {
    FieldUpdated {
        field: TripField,
    },
    BoardTypeChanged {
        from: BoardType,
        to: BoardType,
    },
    DatesResynced {
        added: Vec<TripDate>,
        removed: Vec<TripDate>,
    },
    MealsCleared {
        dates: Vec<TripDate>,
    },
    HotelSelected {
        date: TripDate,
        hotel_id: Option<HotelId>,
    },
    MealSelected {
        date: TripDate,
        slot: MealSlot,
        meal_id: Option<MealId>,
        /// The opposite slot's meal dropped by HalfBoard exclusivity.
        displaced: Option<MealId>,
    },
    MealEditIgnored {
        date: TripDate,
        slot: MealSlot,
    },
}

impl TripEvent {
    /// Returns the dotted event type name used in logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            TripEvent::FieldUpdated { .. } => "trip.field_updated",
            TripEvent::BoardTypeChanged { .. } => "trip.board_type_changed",
            TripEvent::DatesResynced { .. } => "trip.dates_resynced",
            TripEvent::MealsCleared { .. } => "trip.meals_cleared",
            TripEvent::HotelSelected { .. } => "selection.hotel_selected",
            TripEvent::MealSelected { .. } => "selection.meal_selected",
            TripEvent::MealEditIgnored { .. } => "selection.meal_edit_ignored",
        }
    }
}
