//! Trip planner command loop.
//!
//! Reads one JSON `PlannerCommand` per line from stdin, applies it to a single
//! session and writes one JSON line per command to stdout with the emitted
//! events and the updated quote. Logs go to stderr.

use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use trip_planner::adapters::{default_catalog, InMemoryCatalog, YamlCatalogLoader};
use trip_planner::application::{PlannerCommand, PlannerResponse, TripSession};
use trip_planner::config::AppConfig;
use trip_planner::domain::foundation::{DomainError, ErrorCode};

fn load_catalog(config: &AppConfig) -> Result<InMemoryCatalog, DomainError> {
    match &config.catalog.path {
        Some(path) => Ok(YamlCatalogLoader::from_path(path)?),
        None => Ok(default_catalog().clone()),
    }
}

fn write_line(out: &mut impl Write, response: &PlannerResponse) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init_tracing()?;

    let catalog = load_catalog(&config)?;
    let today = chrono::Local::now().date_naive();
    let mut session = TripSession::start(&catalog, &config.planner, today);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_line(&mut out, &PlannerResponse::applied(Vec::new(), session.quote(&catalog)))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command: PlannerCommand = match serde_json::from_str(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Skipping malformed command");
                let err = DomainError::new(ErrorCode::InvalidFormat, e.to_string());
                write_line(&mut out, &PlannerResponse::rejected(err))?;
                continue;
            }
        };

        let response = match session.apply(command) {
            Ok(events) => PlannerResponse::applied(events, session.quote(&catalog)),
            Err(e) => PlannerResponse::rejected(e),
        };
        write_line(&mut out, &response)?;
    }

    info!(session_id = %session.id(), "Input closed, session ended");
    Ok(())
}
