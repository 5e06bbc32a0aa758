//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the trip planner domain.

mod board_type;
mod errors;
mod ids;
mod money;
mod trip_date;

pub use board_type::BoardType;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{HotelId, MealId, SessionId};
pub use money::Money;
pub use trip_date::TripDate;
