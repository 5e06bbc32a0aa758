//! Derivation of the trip's calendar days from its configuration.

use crate::domain::foundation::TripDate;

/// Derives the ordered, contiguous sequence of trip days.
///
/// Returns an empty sequence when `start_date` is empty or unparseable, when
/// `days` is zero, or when the last day would fall past the calendar's end.
/// An empty result means "not yet configured", not a failure.
pub fn derive_dates(start_date: &str, days: u32) -> Vec<TripDate> {
    if days == 0 {
        return Vec::new();
    }
    let Ok(start) = TripDate::parse(start_date) else {
        return Vec::new();
    };

    if start.plus_days(u64::from(days) - 1).is_none() {
        return Vec::new();
    }

    let mut dates = Vec::with_capacity(days as usize);
    dates.extend((0..u64::from(days)).filter_map(|offset| start.plus_days(offset)));
    dates
}
