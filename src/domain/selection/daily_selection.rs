//! Per-day selection record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{HotelId, MealId};

/// Which meal of the day a selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Returns the opposite slot.
    pub fn other(&self) -> MealSlot {
        match self {
            MealSlot::Lunch => MealSlot::Dinner,
            MealSlot::Dinner => MealSlot::Lunch,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        };
        write!(f, "{}", s)
    }
}

/// Hotel and meal choices for one trip day. Every slot is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_id: Option<HotelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_id: Option<MealId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner_id: Option<MealId>,
}

impl DailySelection {
    /// A record holding only a hotel.
    pub fn with_hotel(hotel_id: HotelId) -> Self {
        Self {
            hotel_id: Some(hotel_id),
            ..Self::default()
        }
    }

    /// Returns the meal in `slot`.
    pub fn meal(&self, slot: MealSlot) -> Option<MealId> {
        match slot {
            MealSlot::Lunch => self.lunch_id,
            MealSlot::Dinner => self.dinner_id,
        }
    }

    /// Returns a mutable reference to the meal in `slot`.
    pub fn meal_mut(&mut self, slot: MealSlot) -> &mut Option<MealId> {
        match slot {
            MealSlot::Lunch => &mut self.lunch_id,
            MealSlot::Dinner => &mut self.dinner_id,
        }
    }

    /// Returns true if any meal is selected.
    pub fn has_meals(&self) -> bool {
        self.lunch_id.is_some() || self.dinner_id.is_some()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.hotel_id.is_none() && !self.has_meals()
    }

    /// Returns this record without its meals.
    pub fn without_meals(&self) -> Self {
        Self {
            hotel_id: self.hotel_id,
            lunch_id: None,
            dinner_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        assert!(DailySelection::default().is_empty());
    }

    #[test]
    fn other_slot_swaps() {
        assert_eq!(MealSlot::Lunch.other(), MealSlot::Dinner);
        assert_eq!(MealSlot::Dinner.other(), MealSlot::Lunch);
    }

    #[test]
    fn without_meals_keeps_hotel() {
        let record = DailySelection {
            hotel_id: Some(HotelId::new(3)),
            lunch_id: Some(MealId::new(1)),
            dinner_id: Some(MealId::new(2)),
        };
        assert_eq!(record.without_meals(), DailySelection::with_hotel(HotelId::new(3)));
    }

    #[test]
    fn empty_record_serializes_as_empty_object() {
        let json = serde_json::to_string(&DailySelection::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
