//! Planner commands - the only inputs that mutate a trip session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BoardType, HotelId, MealId, TripDate};
use crate::domain::selection::MealSlot;
use crate::domain::trip::DaysInput;

/// A user edit, as received from the outside world.
///
/// Serialized with a `command` tag, e.g.
/// `{"command": "set_hotel", "date": "2024-03-01", "hotel_id": 2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlannerCommand {
    SetCitizenship {
        value: String,
    },
    SetStartDate {
        value: String,
    },
    SetDays {
        value: DaysInput,
    },
    SetDestination {
        value: String,
    },
    SetBoardType {
        board_type: BoardType,
    },
    SetHotel {
        date: TripDate,
        #[serde(default)]
        hotel_id: Option<HotelId>,
    },
    SetMeal {
        date: TripDate,
        slot: MealSlot,
        #[serde(default)]
        meal_id: Option<MealId>,
    },
}

impl PlannerCommand {
    /// Returns the command name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PlannerCommand::SetCitizenship { .. } => "set_citizenship",
            PlannerCommand::SetStartDate { .. } => "set_start_date",
            PlannerCommand::SetDays { .. } => "set_days",
            PlannerCommand::SetDestination { .. } => "set_destination",
            PlannerCommand::SetBoardType { .. } => "set_board_type",
            PlannerCommand::SetHotel { .. } => "set_hotel",
            PlannerCommand::SetMeal { .. } => "set_meal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_hotel() {
        let cmd: PlannerCommand =
            serde_json::from_str(r#"{"command":"set_hotel","date":"2024-03-01","hotel_id":2}"#)
                .unwrap();
        assert_eq!(
            cmd,
            PlannerCommand::SetHotel {
                date: TripDate::from_ymd(2024, 3, 1).unwrap(),
                hotel_id: Some(HotelId::new(2)),
            }
        );
    }

    #[test]
    fn missing_meal_id_means_clear() {
        let cmd: PlannerCommand = serde_json::from_str(
            r#"{"command":"set_meal","date":"2024-03-01","slot":"dinner"}"#,
        )
        .unwrap();
        assert!(matches!(cmd, PlannerCommand::SetMeal { meal_id: None, .. }));
    }

    #[test]
    fn days_accepts_text_and_numbers() {
        let text: PlannerCommand =
            serde_json::from_str(r#"{"command":"set_days","value":"4"}"#).unwrap();
        let number: PlannerCommand =
            serde_json::from_str(r#"{"command":"set_days","value":4}"#).unwrap();

        for cmd in [text, number] {
            match cmd {
                PlannerCommand::SetDays { value } => assert_eq!(value.coerce(), 4),
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_invalid_date() {
        let result: Result<PlannerCommand, _> =
            serde_json::from_str(r#"{"command":"set_hotel","date":"2024-02-30","hotel_id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_command() {
        let result: Result<PlannerCommand, _> =
            serde_json::from_str(r#"{"command":"book_flight"}"#);
        assert!(result.is_err());
    }
}
