//! Daily selection store.
//!
//! Maps each trip day to its [`DailySelection`], enforces board-type meal
//! rules, and reconciles its key set with the trip's derived dates.
//!
//! # Invariants
//!
//! - After `sync_with_dates`, the key set equals the given dates exactly
//! - Under HalfBoard, an edit never leaves both lunch and dinner set
//! - Under NoBoard, meal edits never change state

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{BoardType, HotelId, MealId, TripDate};

use super::{DailySelection, MealSlot};

/// Outcome of a meal edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealEdit {
    /// The edit was applied; `displaced` is the opposite slot's meal cleared
    /// by HalfBoard exclusivity, if any.
    Applied { displaced: Option<MealId> },
    /// The board type allows no meals; nothing changed.
    Ignored,
}

/// Dates added and dropped by a resync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResyncReport {
    pub added: Vec<TripDate>,
    pub removed: Vec<TripDate>,
}

impl ResyncReport {
    /// Returns true if the key set did not change.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Per-day selections keyed by trip date, in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailySelectionStore {
    selections: BTreeMap<TripDate, DailySelection>,
}

impl DailySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the record for `date`, if one exists.
    pub fn get(&self, date: &TripDate) -> Option<&DailySelection> {
        self.selections.get(date)
    }

    /// Returns the record for `date`, or an empty record if none exists.
    pub fn selection_or_default(&self, date: &TripDate) -> DailySelection {
        self.selections.get(date).copied().unwrap_or_default()
    }

    /// Returns true if a record exists for `date`.
    pub fn contains(&self, date: &TripDate) -> bool {
        self.selections.contains_key(date)
    }

    /// Iterates records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&TripDate, &DailySelection)> {
        self.selections.iter()
    }

    /// Returns the stored dates in chronological order.
    pub fn dates(&self) -> Vec<TripDate> {
        self.selections.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Returns the dates among `dates` that have no hotel selected.
    pub fn dates_missing_hotel(&self, dates: &[TripDate]) -> Vec<TripDate> {
        dates
            .iter()
            .filter(|date| self.selection_or_default(date).hotel_id.is_none())
            .copied()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets or clears the hotel for `date`. No other slot is touched.
    pub fn set_hotel(&mut self, date: TripDate, hotel_id: Option<HotelId>) {
        self.entry(date).hotel_id = hotel_id;
    }

    /// Sets or clears a meal for `date` under the given board type.
    ///
    /// - NoBoard: ignored, state unchanged
    /// - `None`: clears `slot` only
    /// - `Some` under HalfBoard: sets `slot` and clears the opposite slot
    /// - `Some` under FullBoard: sets `slot` only
    pub fn set_meal(
        &mut self,
        date: TripDate,
        slot: MealSlot,
        meal_id: Option<MealId>,
        board_type: BoardType,
    ) -> MealEdit {
        if !board_type.allows_meals() {
            return MealEdit::Ignored;
        }

        let record = self.entry(date);
        *record.meal_mut(slot) = meal_id;

        let displaced = if meal_id.is_some() && board_type.meals_exclusive() {
            record.meal_mut(slot.other()).take()
        } else {
            None
        };

        MealEdit::Applied { displaced }
    }

    /// Drops lunch and dinner for each of `dates` that has a record, keeping
    /// the hotel. Dates without a record are skipped.
    ///
    /// Returns the dates whose records held at least one meal.
    pub fn clear_meals(&mut self, dates: &[TripDate]) -> Vec<TripDate> {
        let mut cleared = Vec::new();
        for date in dates {
            if let Some(record) = self.selections.get_mut(date) {
                if record.has_meals() {
                    cleared.push(*date);
                }
                *record = record.without_meals();
            }
        }
        cleared
    }

    /// Rebuilds the store keyed exactly by `dates`.
    ///
    /// Records for dates in both the old and new sets carry over unchanged,
    /// new dates get an empty record, and the rest are dropped.
    pub fn sync_with_dates(&mut self, dates: &[TripDate]) -> ResyncReport {
        let wanted: BTreeSet<TripDate> = dates.iter().copied().collect();
        let mut previous = std::mem::take(&mut self.selections);

        let mut report = ResyncReport::default();
        for date in &wanted {
            let record = match previous.remove(date) {
                Some(existing) => existing,
                None => {
                    report.added.push(*date);
                    DailySelection::default()
                }
            };
            self.selections.insert(*date, record);
        }
        report.removed = previous.into_keys().collect();

        report
    }

    /// Get-or-create the record for `date`.
    fn entry(&mut self, date: TripDate) -> &mut DailySelection {
        self.selections.entry(date).or_default()
    }
}
