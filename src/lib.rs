//! Trip Planner - multi-day trip configuration with per-day hotel and meal
//! selection.
//!
//! This crate derives a trip's calendar days from its configuration, keeps a
//! per-day selection record aligned with those days, enforces board-type meal
//! rules, and prices the result against a destination catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
