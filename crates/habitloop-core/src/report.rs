//! Read-only reporting views over the document.
//!
//! Every function takes an explicit `today` so results are reproducible
//! in tests without touching the wall clock.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{Document, Habit};
use crate::streak::{streaks, StreakSummary};

/// Default lookback for the history listing, in days.
pub const DEFAULT_HISTORY_WINDOW: u64 = 30;

/// Number of 7-day windows in the weekly progress view.
pub const WEEKLY_BUCKETS: u64 = 4;

/// One row of the all-habits summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub name: String,
    /// Count of completion dates.
    pub total: usize,
    pub streaks: StreakSummary,
    /// Most recent completion, if any.
    pub last_done: Option<NaiveDate>,
}

/// Summary rows for every habit, in name order.
pub fn summarize(doc: &Document, today: NaiveDate) -> Vec<HabitSummary> {
    doc.habits
        .iter()
        .map(|(name, habit)| HabitSummary {
            name: name.clone(),
            total: habit.total(),
            streaks: streaks(&habit.done_dates, today),
            last_done: habit.last_done(),
        })
        .collect()
}

/// Completion dates on or after `today - window_days`, ascending.
///
/// The cutoff is inclusive, so a window of 3 from 2024-01-05 admits dates
/// from 2024-01-02 onward.
pub fn history(habit: &Habit, today: NaiveDate, window_days: u64) -> Vec<NaiveDate> {
    let cutoff = today
        .checked_sub_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MIN);
    habit
        .done_dates
        .iter()
        .copied()
        .filter(|d| *d >= cutoff)
        .collect()
}

/// One 7-day window of the weekly progress view, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub count: usize,
}

/// The last four 7-day windows ending today, oldest first.
///
/// Window w spans `[today - (7w + 6), today - 7w]`; together the four
/// windows partition the last 28 days. Buckets are computed most recent
/// first and reversed, so display order runs oldest to newest.
pub fn weekly_progress(habit: &Habit, today: NaiveDate) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = (0..WEEKLY_BUCKETS)
        .map(|w| {
            let end = today
                .checked_sub_days(Days::new(7 * w))
                .unwrap_or(NaiveDate::MIN);
            let start = today
                .checked_sub_days(Days::new(7 * w + 6))
                .unwrap_or(NaiveDate::MIN);
            let count = habit
                .done_dates
                .iter()
                .filter(|&&d| d >= start && d <= end)
                .count();
            WeekBucket { start, end, count }
        })
        .collect();
    buckets.reverse();
    buckets
}

/// Default export path for a habit: spaces become underscores.
pub fn default_export_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}_history.csv", name.replace(' ', "_")))
}

/// Write all completion dates for `habit` to `path`, ascending, with a
/// single `date` header column.
pub fn export_csv(habit: &Habit, path: &Path) -> Result<(), StoreError> {
    let export_err = |source: csv::Error| StoreError::ExportFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(export_err)?;
    writer.write_record(["date"]).map_err(export_err)?;
    for date in &habit.done_dates {
        writer.write_record([date.to_string()]).map_err(export_err)?;
    }
    writer
        .flush()
        .map_err(|source| export_err(source.into()))?;
    Ok(())
}
