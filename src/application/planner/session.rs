//! TripSession - owned planning state and its single update path.
//!
//! A session owns the trip configuration, the dates derived from it, and the
//! per-day selections. Every mutation goes through this type so that a
//! change to the start date or trip length is resynced into the selection
//! store before anything can read it.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::PlannerConfig;
use crate::domain::foundation::{BoardType, HotelId, MealId, SessionId, TripDate};
use crate::domain::pricing::{compute_breakdown, compute_grand_total};
use crate::domain::selection::{DailySelectionStore, MealEdit, MealSlot};
use crate::domain::trip::{DaysInput, FieldUpdate, TripConfiguration, TripEvent};
use crate::ports::Catalog;

use super::{PlannerCommand, PlannerError, TripQuote};

/// Planning state for one user session.
///
/// # Invariants
///
/// - `dates == configuration.derived_dates()` after every operation
/// - the selection store's keys equal `dates` after every operation
#[derive(Debug, Clone)]
pub struct TripSession {
    id: SessionId,
    configuration: TripConfiguration,
    dates: Vec<TripDate>,
    selections: DailySelectionStore,
    max_days_input: Option<u32>,
}

impl TripSession {
    /// Creates a session for an explicit configuration.
    pub fn new(configuration: TripConfiguration) -> Self {
        let dates = configuration.derived_dates();
        let mut selections = DailySelectionStore::new();
        selections.sync_with_dates(&dates);

        Self {
            id: SessionId::new(),
            configuration,
            dates,
            selections,
            max_days_input: None,
        }
    }

    /// Creates a session with the configured defaults starting on `today`.
    ///
    /// The destination is the configured default, else the catalog's first
    /// destination. Citizenship defaults to the catalog's first country.
    pub fn start(catalog: &dyn Catalog, defaults: &PlannerConfig, today: NaiveDate) -> Self {
        let destination = defaults
            .default_destination
            .clone()
            .or_else(|| catalog.destinations().into_iter().next())
            .unwrap_or_default();
        let citizenship = catalog
            .countries()
            .into_iter()
            .next()
            .map(|c| c.name)
            .unwrap_or_default();

        let configuration = TripConfiguration::new(
            citizenship,
            TripDate::from_naive(today).to_string(),
            defaults.default_days,
            destination,
            defaults.default_board_type,
        );
        let session = Self::new(configuration).with_max_days_input(defaults.max_days_input);

        info!(
            session_id = %session.id,
            destination = session.configuration.destination(),
            days = session.configuration.days(),
            "Started trip session"
        );
        session
    }

    /// Caps day counts received through [`PlannerCommand::SetDays`].
    pub fn with_max_days_input(mut self, cap: u32) -> Self {
        self.max_days_input = Some(cap.max(1));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn configuration(&self) -> &TripConfiguration {
        &self.configuration
    }

    /// The trip's days in chronological order.
    pub fn dates(&self) -> &[TripDate] {
        &self.dates
    }

    pub fn selections(&self) -> &DailySelectionStore {
        &self.selections
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Update interface
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one command and returns the events it produced.
    ///
    /// # Errors
    ///
    /// - `DateNotInTrip` if a hotel or meal edit targets a day outside the trip
    pub fn apply(&mut self, command: PlannerCommand) -> Result<Vec<TripEvent>, PlannerError> {
        debug!(session_id = %self.id, command = command.name(), "Applying command");

        let events = match command {
            PlannerCommand::SetCitizenship { value } => {
                Ok(self.update_field(FieldUpdate::Citizenship(value)))
            }
            PlannerCommand::SetStartDate { value } => {
                Ok(self.update_field(FieldUpdate::StartDate(value)))
            }
            PlannerCommand::SetDays { value } => {
                let days = match self.max_days_input {
                    Some(cap) => value.coerce().min(cap),
                    None => value.coerce(),
                };
                Ok(self.update_field(FieldUpdate::Days(DaysInput::from(days))))
            }
            PlannerCommand::SetDestination { value } => {
                Ok(self.update_field(FieldUpdate::Destination(value)))
            }
            PlannerCommand::SetBoardType { board_type } => Ok(self.set_board_type(board_type)),
            PlannerCommand::SetHotel { date, hotel_id } => self.set_hotel(date, hotel_id),
            PlannerCommand::SetMeal {
                date,
                slot,
                meal_id,
            } => self.set_meal(date, slot, meal_id),
        }?;

        for event in &events {
            debug!(session_id = %self.id, event_type = event.event_type(), "Event emitted");
        }
        Ok(events)
    }

    /// Applies a configuration point update, resyncing selections when the
    /// derived dates may have changed.
    pub fn update_field(&mut self, update: FieldUpdate) -> Vec<TripEvent> {
        let field = update.field();
        if !self.configuration.update_field(update) {
            return Vec::new();
        }

        let mut events = vec![TripEvent::FieldUpdated { field }];
        if field.affects_dates() {
            events.extend(self.resync());
        }
        events
    }

    /// Switches the board type. Entering NoBoard clears every day's meals
    /// once; re-selecting the current board type does nothing.
    pub fn set_board_type(&mut self, code: BoardType) -> Vec<TripEvent> {
        let Some(transition) = self.configuration.set_board_type(code) else {
            return Vec::new();
        };

        debug!(
            session_id = %self.id,
            from = transition.from.code(),
            to = transition.to.code(),
            "Board type changed"
        );
        let mut events = vec![TripEvent::BoardTypeChanged {
            from: transition.from,
            to: transition.to,
        }];

        if transition.clears_meals() {
            let cleared = self.selections.clear_meals(&self.dates);
            if !cleared.is_empty() {
                debug!(session_id = %self.id, days = cleared.len(), "Cleared meals");
            }
            events.push(TripEvent::MealsCleared { dates: cleared });
        }
        events
    }

    /// Sets or clears the hotel for one trip day.
    pub fn set_hotel(
        &mut self,
        date: TripDate,
        hotel_id: Option<HotelId>,
    ) -> Result<Vec<TripEvent>, PlannerError> {
        self.ensure_in_trip(date)?;
        self.selections.set_hotel(date, hotel_id);
        Ok(vec![TripEvent::HotelSelected { date, hotel_id }])
    }

    /// Sets or clears a meal for one trip day under the current board type.
    ///
    /// Under NoBoard every meal edit is ignored, whatever its date.
    pub fn set_meal(
        &mut self,
        date: TripDate,
        slot: MealSlot,
        meal_id: Option<MealId>,
    ) -> Result<Vec<TripEvent>, PlannerError> {
        let board_type = self.configuration.board_type();
        if board_type.allows_meals() {
            self.ensure_in_trip(date)?;
        }

        match self.selections.set_meal(date, slot, meal_id, board_type) {
            MealEdit::Applied { displaced } => Ok(vec![TripEvent::MealSelected {
                date,
                slot,
                meal_id,
                displaced,
            }]),
            MealEdit::Ignored => {
                debug!(session_id = %self.id, %date, %slot, "Meal edit ignored under no board");
                Ok(vec![TripEvent::MealEditIgnored { date, slot }])
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Prices the current selections against the destination's catalog.
    pub fn quote(&self, catalog: &dyn Catalog) -> TripQuote {
        let slice = catalog.slice_for(self.configuration.destination());
        let days = compute_breakdown(&self.dates, &self.selections, &slice);
        let grand_total = compute_grand_total(&days);

        TripQuote {
            session_id: self.id,
            destination: self.configuration.destination().to_string(),
            board_type: self.configuration.board_type(),
            grand_total,
            missing_hotel: self.selections.dates_missing_hotel(&self.dates),
            days,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-derives the dates and reconciles the store with them.
    fn resync(&mut self) -> Option<TripEvent> {
        self.dates = self.configuration.derived_dates();
        let report = self.selections.sync_with_dates(&self.dates);
        if report.is_unchanged() {
            return None;
        }

        debug!(
            session_id = %self.id,
            added = report.added.len(),
            removed = report.removed.len(),
            "Resynced selections"
        );
        Some(TripEvent::DatesResynced {
            added: report.added,
            removed: report.removed,
        })
    }

    fn ensure_in_trip(&self, date: TripDate) -> Result<(), PlannerError> {
        if self.dates.binary_search(&date).is_ok() {
            Ok(())
        } else {
            warn!(session_id = %self.id, %date, "Rejected edit outside trip dates");
            Err(PlannerError::DateNotInTrip(date))
        }
    }
}
