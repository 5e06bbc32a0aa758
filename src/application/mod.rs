//! Application layer - Commands, sessions and read models.
//!
//! This layer orchestrates domain operations and coordinates with ports.

pub mod planner;

pub use planner::{
    ErrorResponse, PlannerCommand, PlannerError, PlannerResponse, SharedTripSession, TripQuote,
    TripSession,
};
