//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Hotel, meal, board type and country values
//! - `trip` - Trip configuration, date derivation and planning events
//! - `selection` - Per-day selections and the board-type rules over them
//! - `pricing` - Pure pricing services (per-day breakdown, grand total)

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod selection;
pub mod trip;
