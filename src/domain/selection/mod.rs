//! Selection domain module.
//!
//! Per-day hotel and meal choices and the store that keeps them aligned with
//! the trip's dates and board-type rules.

mod daily_selection;
mod store;

pub use daily_selection::{DailySelection, MealSlot};
pub use store::{DailySelectionStore, MealEdit, ResyncReport};
