//! Trip domain module.
//!
//! Trip configuration state, derivation of the trip's calendar days, and the
//! events emitted while planning.

mod configuration;
mod date_range;
mod events;

pub use configuration::{BoardTransition, DaysInput, FieldUpdate, TripConfiguration, TripField};
pub use date_range::derive_dates;
pub use events::TripEvent;
