//! SharedTripSession - a session guarded for concurrent callers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::trip::TripEvent;
use crate::ports::Catalog;

use super::{PlannerCommand, PlannerError, TripQuote, TripSession};

/// A [`TripSession`] behind whole-store mutual exclusion.
///
/// Commands and quotes are serialized through one lock, so a resync caused
/// by a command is complete before any later quote reads the selections.
#[derive(Debug, Clone)]
pub struct SharedTripSession {
    inner: Arc<Mutex<TripSession>>,
}

impl SharedTripSession {
    pub fn new(session: TripSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Applies a command under the session lock.
    pub fn apply(&self, command: PlannerCommand) -> Result<Vec<TripEvent>, PlannerError> {
        self.lock()?.apply(command)
    }

    /// Prices the session under the session lock.
    pub fn quote(&self, catalog: &dyn Catalog) -> Result<TripQuote, PlannerError> {
        Ok(self.lock()?.quote(catalog))
    }

    /// Applies a command and prices the result without releasing the lock
    /// in between.
    pub fn apply_and_quote(
        &self,
        command: PlannerCommand,
        catalog: &dyn Catalog,
    ) -> Result<(Vec<TripEvent>, TripQuote), PlannerError> {
        let mut session = self.lock()?;
        let events = session.apply(command)?;
        Ok((events, session.quote(catalog)))
    }

    /// Returns a copy of the current session state.
    pub fn snapshot(&self) -> Result<TripSession, PlannerError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, TripSession>, PlannerError> {
        self.inner.lock().map_err(|_| PlannerError::SessionUnavailable)
    }
}
