//! Per-day price breakdown and grand total.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{DestinationCatalog, Hotel, Meal};
use crate::domain::foundation::{Money, TripDate};
use crate::domain::selection::DailySelectionStore;

/// Resolved selections and their subtotal for one trip day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBreakdown {
    pub date: TripDate,
    pub hotel: Option<Hotel>,
    pub lunch: Option<Meal>,
    pub dinner: Option<Meal>,
    pub subtotal: Money,
}

/// Resolves each day's selections against the destination's catalog slice.
///
/// Ids with no matching catalog entry resolve to absent and price as zero.
/// A date with no stored record is priced as an empty day.
pub fn compute_breakdown(
    dates: &[TripDate],
    selections: &DailySelectionStore,
    catalog: &DestinationCatalog,
) -> Vec<DayBreakdown> {
    dates
        .iter()
        .map(|date| {
            let selection = selections.selection_or_default(date);

            let hotel = selection.hotel_id.and_then(|id| catalog.hotel(id)).cloned();
            let lunch = selection.lunch_id.and_then(|id| catalog.lunch(id)).cloned();
            let dinner = selection.dinner_id.and_then(|id| catalog.dinner(id)).cloned();

            let subtotal = [
                hotel.as_ref().map(|h| h.price),
                lunch.as_ref().map(|m| m.price),
                dinner.as_ref().map(|m| m.price),
            ]
            .into_iter()
            .flatten()
            .sum();

            DayBreakdown {
                date: *date,
                hotel,
                lunch,
                dinner,
                subtotal,
            }
        })
        .collect()
}

/// Sums every day's subtotal.
pub fn compute_grand_total(breakdown: &[DayBreakdown]) -> Money {
    breakdown.iter().map(|day| day.subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MealOptions;
    use crate::domain::foundation::{BoardType, HotelId, MealId};
    use crate::domain::selection::MealSlot;
    use crate::domain::trip::derive_dates;

    fn price(amount: f64) -> Money {
        Money::try_new(amount).unwrap()
    }

    fn catalog() -> DestinationCatalog {
        DestinationCatalog {
            destination: "Istanbul".to_string(),
            hotels: vec![
                Hotel::new(HotelId::new(1), "Pera Palace", price(100.0)),
                Hotel::new(HotelId::new(2), "Galata Inn", price(30.0)),
            ],
            meals: MealOptions {
                lunch: vec![Meal::new(MealId::new(1), "Meze plate", price(20.0))],
                dinner: vec![Meal::new(MealId::new(1), "Fish dinner", price(15.0))],
            },
        }
    }

    #[test]
    fn subtotal_adds_hotel_and_lunch() {
        let days = derive_dates("2024-03-01", 1);
        let mut store = DailySelectionStore::new();
        store.sync_with_dates(&days);
        store.set_hotel(days[0], Some(HotelId::new(1)));
        store.set_meal(days[0], MealSlot::Lunch, Some(MealId::new(1)), BoardType::FullBoard);

        let breakdown = compute_breakdown(&days, &store, &catalog());

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].subtotal, price(120.0));
        assert_eq!(breakdown[0].hotel.as_ref().unwrap().name, "Pera Palace");
        assert!(breakdown[0].dinner.is_none());
    }

    #[test]
    fn grand_total_sums_subtotals() {
        let days = derive_dates("2024-03-01", 3);
        let mut store = DailySelectionStore::new();
        store.sync_with_dates(&days);
        store.set_hotel(days[0], Some(HotelId::new(1)));
        store.set_meal(days[0], MealSlot::Lunch, Some(MealId::new(1)), BoardType::FullBoard);
        store.set_hotel(days[2], Some(HotelId::new(2)));
        store.set_meal(days[2], MealSlot::Dinner, Some(MealId::new(1)), BoardType::FullBoard);

        let breakdown = compute_breakdown(&days, &store, &catalog());
        let subtotals: Vec<f64> = breakdown.iter().map(|d| d.subtotal.amount()).collect();

        assert_eq!(subtotals, [120.0, 0.0, 45.0]);
        assert_eq!(compute_grand_total(&breakdown), price(165.0));
    }

    #[test]
    fn stale_ids_price_as_absent() {
        let days = derive_dates("2024-03-01", 1);
        let mut store = DailySelectionStore::new();
        store.sync_with_dates(&days);
        store.set_hotel(days[0], Some(HotelId::new(77)));
        store.set_meal(days[0], MealSlot::Dinner, Some(MealId::new(8)), BoardType::FullBoard);

        let breakdown = compute_breakdown(&days, &store, &catalog());

        assert!(breakdown[0].hotel.is_none());
        assert!(breakdown[0].dinner.is_none());
        assert!(breakdown[0].subtotal.is_zero());
    }

    #[test]
    fn dates_without_records_price_as_empty_days() {
        let days = derive_dates("2024-03-01", 2);
        let store = DailySelectionStore::new();
        let breakdown = compute_breakdown(&days, &store, &catalog());
        assert_eq!(breakdown.len(), 2);
        assert!(compute_grand_total(&breakdown).is_zero());
    }

    #[test]
    fn no_dates_means_zero_total() {
        let breakdown = compute_breakdown(&[], &DailySelectionStore::new(), &catalog());
        assert!(breakdown.is_empty());
        assert_eq!(compute_grand_total(&breakdown), Money::ZERO);
    }
}
