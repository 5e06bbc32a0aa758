//! Pricing - pure domain services combining catalog prices with selections.

mod breakdown;

pub use breakdown::{compute_breakdown, compute_grand_total, DayBreakdown};
