//! Planner-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TripDate};

/// Errors surfaced by the planner's update interface.
///
/// User input inside the trip never fails; these cover requests that
/// cannot be addressed to the current session at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// The edit targets a day outside the current trip.
    #[error("Date {0} is not part of the trip")]
    DateNotInTrip(TripDate),

    /// The shared session lock was poisoned by a panicking holder.
    #[error("Planner session is unavailable")]
    SessionUnavailable,
}

impl PlannerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PlannerError::DateNotInTrip(_) => ErrorCode::DateNotInTrip,
            PlannerError::SessionUnavailable => ErrorCode::SessionUnavailable,
        }
    }
}

impl From<PlannerError> for DomainError {
    fn from(err: PlannerError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            PlannerError::DateNotInTrip(date) => domain.with_detail("date", date.to_string()),
            PlannerError::SessionUnavailable => domain,
        }
    }
}
