//! Persisted data model: the habit document and per-habit completion dates.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level persisted object: habit name -> completion record.
///
/// Names are unique map keys and non-empty after trimming; the registry
/// enforces both on insert. `BTreeMap` keeps iteration and serialization
/// order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub habits: BTreeMap<String, Habit>,
}

impl Document {
    /// Restore invariants after loading from disk: `done_dates` sorted
    /// ascending with no duplicates, even if the file was hand-edited.
    pub fn normalize(&mut self) {
        for habit in self.habits.values_mut() {
            habit.done_dates.sort_unstable();
            habit.done_dates.dedup();
        }
    }
}

/// Completion record for a single habit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Completion dates, sorted ascending, each appearing at most once.
    #[serde(default)]
    pub done_dates: Vec<NaiveDate>,
}

impl Habit {
    /// Insert a completion date at its sorted position.
    ///
    /// Returns `false` when the date is already present.
    pub fn insert_date(&mut self, date: NaiveDate) -> bool {
        match self.done_dates.binary_search(&date) {
            Ok(_) => false,
            Err(pos) => {
                self.done_dates.insert(pos, date);
                true
            }
        }
    }

    /// Remove a completion date.
    ///
    /// Returns `false` when the date was not present.
    pub fn remove_date(&mut self, date: NaiveDate) -> bool {
        match self.done_dates.binary_search(&date) {
            Ok(pos) => {
                self.done_dates.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.done_dates.binary_search(&date).is_ok()
    }

    /// Most recent completion, if any.
    pub fn last_done(&self) -> Option<NaiveDate> {
        self.done_dates.last().copied()
    }

    pub fn total(&self) -> usize {
        self.done_dates.len()
    }
}
