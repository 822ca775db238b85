//! Terminal rendering of the reporting views.

use chrono::NaiveDate;

use habitloop_core::report::{self, HabitSummary};
use habitloop_core::Habit;

pub fn summary(rows: &[HabitSummary]) {
    if rows.is_empty() {
        println!("No habits yet. Add one!");
        return;
    }
    println!("\nHabit Summary:");
    for row in rows {
        let last = row
            .last_done
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("\n* {}", row.name);
        println!("  - Total completions: {}", row.total);
        println!("  - Current streak: {} day(s)", row.streaks.current);
        println!("  - Best streak: {} day(s)", row.streaks.best);
        println!("  - Last done: {last}");
    }
}

pub fn history(name: &str, habit: &Habit, today: NaiveDate, window_days: u64) {
    println!("\nHistory for '{name}':");
    if habit.done_dates.is_empty() {
        println!("No entries yet.");
        return;
    }
    for date in report::history(habit, today, window_days) {
        println!(" - {date}");
    }
}

pub fn weekly(name: &str, habit: &Habit, today: NaiveDate) {
    println!("\nWeekly progress for '{name}':");
    for bucket in report::weekly_progress(habit, today) {
        println!(" {} to {} : {} times", bucket.start, bucket.end, bucket.count);
    }
}
