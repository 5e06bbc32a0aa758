//! Property tests for date derivation, resync and board-type rules.

use proptest::prelude::*;

use trip_planner::domain::foundation::{BoardType, HotelId, MealId, TripDate};
use trip_planner::domain::selection::{DailySelectionStore, MealEdit, MealSlot};
use trip_planner::domain::trip::derive_dates;

fn start_date() -> impl Strategy<Value = TripDate> {
    // 1990-01-01 plus up to ~60 years
    (0u64..22_000).prop_map(|offset| {
        TripDate::from_ymd(1990, 1, 1)
            .and_then(|d| d.plus_days(offset))
            .unwrap()
    })
}

fn board_type() -> impl Strategy<Value = BoardType> {
    prop_oneof![
        Just(BoardType::FullBoard),
        Just(BoardType::HalfBoard),
        Just(BoardType::NoBoard),
    ]
}

fn slot() -> impl Strategy<Value = MealSlot> {
    prop_oneof![Just(MealSlot::Lunch), Just(MealSlot::Dinner)]
}

#[derive(Debug, Clone)]
enum Edit {
    Hotel(usize, Option<u32>),
    Meal(usize, MealSlot, Option<u32>, BoardType),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..10, proptest::option::of(0u32..5)).prop_map(|(d, h)| Edit::Hotel(d, h)),
        (0usize..10, slot(), proptest::option::of(0u32..5), board_type())
            .prop_map(|(d, s, m, b)| Edit::Meal(d, s, m, b)),
    ]
}

/// Builds a store over `days` days from `start` with random edits applied.
fn populated_store(
    start: TripDate,
    days: u32,
    edits: &[Edit],
) -> (Vec<TripDate>, DailySelectionStore) {
    let dates = derive_dates(&start.to_string(), days);
    let mut store = DailySelectionStore::new();
    store.sync_with_dates(&dates);
    for edit in edits {
        match edit {
            Edit::Hotel(i, hotel) => {
                store.set_hotel(dates[i % dates.len()], hotel.map(HotelId::new));
            }
            Edit::Meal(i, slot, meal, board) => {
                store.set_meal(dates[i % dates.len()], *slot, meal.map(MealId::new), *board);
            }
        }
    }
    (dates, store)
}

proptest! {
    #[test]
    fn derived_dates_are_contiguous_from_start(start in start_date(), days in 1u32..400) {
        let dates = derive_dates(&start.to_string(), days);

        prop_assert_eq!(dates.len(), days as usize);
        prop_assert_eq!(dates[0], start);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[0].plus_days(1), Some(pair[1]));
        }
    }

    #[test]
    fn garbage_start_dates_derive_nothing(text in "[a-z ]{0,12}", days in 0u32..50) {
        prop_assert!(derive_dates(&text, days).is_empty());
    }

    #[test]
    fn zero_days_derive_nothing(start in start_date()) {
        prop_assert!(derive_dates(&start.to_string(), 0).is_empty());
    }

    #[test]
    fn resync_is_idempotent(
        start in start_date(),
        days in 1u32..15,
        edits in proptest::collection::vec(edit(), 0..30),
        new_offset in 0u64..10,
        new_days in 0u32..15,
    ) {
        let (_, mut store) = populated_store(start, days, &edits);
        let new_start = start.plus_days(new_offset).unwrap();
        let new_dates = derive_dates(&new_start.to_string(), new_days);

        store.sync_with_dates(&new_dates);
        let once = store.clone();
        let report = store.sync_with_dates(&new_dates);

        prop_assert!(report.is_unchanged());
        prop_assert_eq!(store, once);
    }

    #[test]
    fn resync_keys_equal_dates_and_keep_shared_records(
        start in start_date(),
        days in 1u32..15,
        edits in proptest::collection::vec(edit(), 0..30),
        new_offset in 0u64..20,
        new_days in 0u32..15,
    ) {
        let (_, mut store) = populated_store(start, days, &edits);
        let before = store.clone();
        let new_start = start.plus_days(new_offset).unwrap();
        let new_dates = derive_dates(&new_start.to_string(), new_days);

        store.sync_with_dates(&new_dates);

        prop_assert_eq!(store.dates(), new_dates.clone());
        for date in &new_dates {
            match before.get(date) {
                Some(old) => prop_assert_eq!(store.get(date), Some(old)),
                None => prop_assert!(store.get(date).unwrap().is_empty()),
            }
        }
    }

    #[test]
    fn no_board_meal_edits_never_mutate(
        start in start_date(),
        days in 1u32..10,
        edits in proptest::collection::vec(edit(), 0..30),
        index in 0usize..10,
        slot in slot(),
        meal in proptest::option::of(0u32..5),
    ) {
        let (dates, mut store) = populated_store(start, days, &edits);
        let before = store.clone();

        let outcome = store.set_meal(
            dates[index % dates.len()],
            slot,
            meal.map(MealId::new),
            BoardType::NoBoard,
        );

        prop_assert_eq!(outcome, MealEdit::Ignored);
        prop_assert_eq!(store, before);
    }

    #[test]
    fn half_board_edits_never_leave_both_meals(
        start in start_date(),
        days in 1u32..10,
        meals in proptest::collection::vec((0usize..10, slot(), 0u32..5), 1..30),
    ) {
        let dates = derive_dates(&start.to_string(), days);
        let mut store = DailySelectionStore::new();
        store.sync_with_dates(&dates);

        for (index, slot, meal) in meals {
            let date = dates[index % dates.len()];
            store.set_meal(date, slot, Some(MealId::new(meal)), BoardType::HalfBoard);

            let record = store.get(&date).unwrap();
            prop_assert_eq!(record.meal(slot), Some(MealId::new(meal)));
            prop_assert_eq!(record.meal(slot.other()), None);
        }
    }

    #[test]
    fn full_board_never_displaces(
        start in start_date(),
        days in 1u32..10,
        meals in proptest::collection::vec((0usize..10, slot(), 0u32..5), 1..30),
    ) {
        let dates = derive_dates(&start.to_string(), days);
        let mut store = DailySelectionStore::new();
        store.sync_with_dates(&dates);

        for (index, slot, meal) in meals {
            let date = dates[index % dates.len()];
            let other_before = store.get(&date).unwrap().meal(slot.other());
            let outcome = store.set_meal(date, slot, Some(MealId::new(meal)), BoardType::FullBoard);

            prop_assert_eq!(outcome, MealEdit::Applied { displaced: None });
            prop_assert_eq!(store.get(&date).unwrap().meal(slot.other()), other_before);
        }
    }

    #[test]
    fn clear_meals_preserves_hotels(
        start in start_date(),
        days in 1u32..10,
        edits in proptest::collection::vec(edit(), 0..30),
    ) {
        let (dates, mut store) = populated_store(start, days, &edits);
        let before = store.clone();

        store.clear_meals(&dates);

        for date in &dates {
            let record = store.get(date).unwrap();
            prop_assert!(!record.has_meals());
            prop_assert_eq!(record.hotel_id, before.get(date).unwrap().hotel_id);
        }
    }
}
