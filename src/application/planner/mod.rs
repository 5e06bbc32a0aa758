//! Trip planner application services.
//!
//! `TripSession` owns one user's planning state and is its only mutation
//! path; `SharedTripSession` serializes access to a session across threads.

mod commands;
mod errors;
mod quote;
mod response;
mod session;
mod shared;

pub use commands::PlannerCommand;
pub use errors::PlannerError;
pub use quote::TripQuote;
pub use response::{ErrorResponse, PlannerResponse};
pub use session::TripSession;
pub use shared::SharedTripSession;
