//! Wire responses written by the command loop, one JSON line per command.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;
use crate::domain::trip::TripEvent;

use super::TripQuote;

/// Outcome of one command: the events it produced and the updated quote, or
/// the error that rejected it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlannerResponse {
    Applied {
        events: Vec<TripEvent>,
        quote: TripQuote,
    },
    Rejected {
        error: ErrorResponse,
    },
}

impl PlannerResponse {
    pub fn applied(events: Vec<TripEvent>, quote: TripQuote) -> Self {
        PlannerResponse::Applied { events, quote }
    }

    /// Wraps any error that converts into a [`DomainError`].
    pub fn rejected(err: impl Into<DomainError>) -> Self {
        PlannerResponse::Rejected {
            error: ErrorResponse::from(err.into()),
        }
    }
}

/// Serialized form of a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error code, e.g. `DATE_NOT_IN_TRIP`.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            details: err.details.into_iter().collect(),
        }
    }
}
