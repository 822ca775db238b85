//! Consecutive-day streak computation over completion dates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and best consecutive-day streaks, in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Run ending at today. Zero whenever today itself is unmarked, even
    /// if yesterday was completed; only `best` remembers past runs.
    pub current: u32,
    /// Longest run anywhere in the history.
    pub best: u32,
}

/// Compute streaks from completion dates.
///
/// `dates` need not be sorted or duplicate-free. `today` anchors the
/// current streak and is passed in explicitly so results never depend on
/// the wall clock.
pub fn streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    if days.is_empty() {
        return StreakSummary::default();
    }

    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in &days {
        run = match prev {
            Some(p) if (day - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(day);
    }

    // Walk backward from today until the first unmarked day.
    let mut current = 0u32;
    let mut cursor = today;
    while days.contains(&cursor) {
        current += 1;
        match cursor.pred_opt() {
            Some(day) => cursor = day,
            None => break,
        }
    }

    StreakSummary { current, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    const TODAY: &str = "2024-06-15";

    fn today() -> NaiveDate {
        TODAY.parse().unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(n)).unwrap()
    }

    #[test]
    fn empty_history_has_no_streaks() {
        assert_eq!(streaks(&[], today()), StreakSummary::default());
    }

    #[test]
    fn single_completion_today() {
        let s = streaks(&[today()], today());
        assert_eq!(s, StreakSummary { current: 1, best: 1 });
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let dates = [today(), days_ago(1), days_ago(2)];
        let s = streaks(&dates, today());
        assert_eq!(s, StreakSummary { current: 3, best: 3 });
    }

    #[test]
    fn missing_today_zeroes_current_streak() {
        // Two consecutive days, but neither is today.
        let dates = [days_ago(2), days_ago(3)];
        let s = streaks(&dates, today());
        assert_eq!(s, StreakSummary { current: 0, best: 2 });
    }

    #[test]
    fn yesterday_alone_does_not_count_as_current() {
        let s = streaks(&[days_ago(1)], today());
        assert_eq!(s, StreakSummary { current: 0, best: 1 });
    }

    #[test]
    fn gap_splits_best_streak() {
        // 5-day run, a gap, then a 2-day run ending today.
        let dates = [
            days_ago(10),
            days_ago(9),
            days_ago(8),
            days_ago(7),
            days_ago(6),
            days_ago(1),
            today(),
        ];
        let s = streaks(&dates, today());
        assert_eq!(s, StreakSummary { current: 2, best: 5 });
    }

    #[test]
    fn unsorted_and_duplicated_input_is_tolerated() {
        let dates = [days_ago(1), today(), days_ago(2), today(), days_ago(1)];
        let s = streaks(&dates, today());
        assert_eq!(s, StreakSummary { current: 3, best: 3 });
    }

    #[test]
    fn five_day_scenario() {
        // 2024-01-01 through 2024-01-05 with "today" at the end of the run.
        let dates: Vec<NaiveDate> = (1..=5)
            .map(|day| format!("2024-01-{day:02}").parse().unwrap())
            .collect();
        let anchor: NaiveDate = "2024-01-05".parse().unwrap();
        let s = streaks(&dates, anchor);
        assert_eq!(s, StreakSummary { current: 5, best: 5 });
    }
}
