//! Planner defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::BoardType;

/// Defaults for new planning sessions
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    /// Trip length a new session starts with
    #[serde(default = "default_days")]
    pub default_days: u32,

    /// Upper bound applied to day counts entered by the user
    #[serde(default = "default_max_days_input")]
    pub max_days_input: u32,

    /// Board type a new session starts with
    #[serde(default)]
    pub default_board_type: BoardType,

    /// Destination a new session starts with; the catalog's first
    /// destination when unset
    pub default_destination: Option<String>,
}

impl PlannerConfig {
    /// Validate planner configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_days == 0 {
            return Err(ValidationError::InvalidDefaultDays);
        }
        if self.max_days_input < self.default_days {
            return Err(ValidationError::MaxDaysBelowDefault);
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            max_days_input: default_max_days_input(),
            default_board_type: BoardType::default(),
            default_destination: None,
        }
    }
}

fn default_days() -> u32 {
    3
}

fn default_max_days_input() -> u32 {
    30
}
