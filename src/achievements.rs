use crate::models::{DaySummary, TaskStore};
use crate::store::date_key;
use chrono::{Datelike, NaiveDate};

/// True iff the date has at least one task and every task is completed.
/// Pure read; never touches the stored tree flag.
pub fn evaluate_day(store: &TaskStore, date: NaiveDate) -> bool {
    let tasks = store.tasks_for(date);
    !tasks.is_empty() && tasks.iter().all(|task| task.completed)
}

/// True iff every day of the month has its tree planted.
pub fn evaluate_month(store: &TaskStore, year: i32, month: u32) -> bool {
    let days = days_in_month(year, month);
    days > 0
        && (1..=days).all(|day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .is_some_and(|date| store.is_tree_planted(date))
        })
}

/// Day count via "first of next month minus first of this month", so leap
/// years fall out of the calendar arithmetic. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        None => 0,
    }
}

/// Per-day tree flags for the calendar grid.
pub fn month_days(store: &TaskStore, year: i32, month: u32) -> Vec<DaySummary> {
    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| DaySummary {
            date: date_key(date),
            day: date.day(),
            tree_planted: store.is_tree_planted(date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn store_with_trees(year: i32, month: u32, days: impl Iterator<Item = u32>) -> TaskStore {
        let mut store = TaskStore::default();
        for d in days {
            store.trees_planted.insert(date_key(day(year, month, d)), true);
        }
        store
    }

    #[test]
    fn empty_day_does_not_count_as_complete() {
        let store = TaskStore::default();
        assert!(!evaluate_day(&store, day(2025, 6, 10)));
    }

    #[test]
    fn evaluate_day_is_idempotent() {
        let mut store = TaskStore::default();
        let date = day(2025, 6, 10);
        let task = store.add_task_at(date, date, "Water plants").unwrap().unwrap();
        store.toggle_task(date, task.id).unwrap();

        let before = store.tasks_for(date).to_vec();
        for _ in 0..3 {
            assert!(evaluate_day(&store, date));
        }
        assert_eq!(store.tasks_for(date), before.as_slice());
    }

    #[test]
    fn one_missing_day_breaks_the_forest() {
        // June has 30 days; plant 29 of them.
        let mut store = store_with_trees(2025, 6, (1..=30).filter(|d| *d != 17));
        assert!(!evaluate_month(&store, 2025, 6));

        store.trees_planted.insert(date_key(day(2025, 6, 17)), true);
        assert!(evaluate_month(&store, 2025, 6));
    }

    #[test]
    fn forest_is_false_for_an_empty_month() {
        let store = TaskStore::default();
        assert!(!evaluate_month(&store, 2025, 6));
    }

    #[test]
    fn leap_years_change_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);

        // 28 planted days are a forest in 2023 but not 2024.
        let store = store_with_trees(2024, 2, 1..=28);
        assert!(!evaluate_month(&store, 2024, 2));
        let store = store_with_trees(2023, 2, 1..=28);
        assert!(evaluate_month(&store, 2023, 2));
    }

    #[test]
    fn days_in_month_covers_the_calendar() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 13), 0);
        assert_eq!(days_in_month(2025, 0), 0);
    }

    #[test]
    fn month_days_reports_each_day_once() {
        let store = store_with_trees(2025, 6, 10..=10);
        let days = month_days(&store, 2025, 6);
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].date, "2025-06-01");
        assert_eq!(days[0].day, 1);
        assert!(days[9].tree_planted);
        assert!(!days[10].tree_planted);
        assert_eq!(days[29].day, day(2025, 6, 30).day());
    }
}
