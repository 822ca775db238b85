//! In-memory habit registry backed by the store.
//!
//! Every mutating operation rewrites the document file before returning;
//! there is no batching. Marking an already-marked date and unmarking an
//! absent one are outcomes, not errors, and skip the save.

use chrono::NaiveDate;
use log::info;

use crate::error::{Result, ValidationError};
use crate::model::{Document, Habit};
use crate::store::Store;

/// Outcome of a mark operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Date inserted and document persisted.
    Marked,
    /// Date already present; nothing changed.
    AlreadyMarked,
}

/// Outcome of an unmark operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmarkOutcome {
    /// Date removed and document persisted.
    Unmarked,
    /// No entry for that date; nothing changed.
    NotMarked,
}

/// The session's habit document plus the store it persists through.
#[derive(Debug)]
pub struct HabitRegistry {
    store: Store,
    doc: Document,
}

impl HabitRegistry {
    /// Load the document behind `store` and wrap it.
    pub fn open(store: Store) -> Result<Self> {
        let doc = store.load()?;
        Ok(Self { store, doc })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Read access to one habit.
    pub fn habit(&self, name: &str) -> Result<&Habit> {
        self.doc
            .habits
            .get(name)
            .ok_or_else(|| ValidationError::UnknownHabit(name.to_string()).into())
    }

    /// Register a new habit with no completions yet. The trimmed name is
    /// what gets stored.
    pub fn add(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.doc.habits.contains_key(name) {
            return Err(ValidationError::DuplicateHabit(name.to_string()).into());
        }
        self.doc.habits.insert(name.to_string(), Habit::default());
        self.store.save(&self.doc)?;
        info!("registry: added habit '{name}'");
        Ok(())
    }

    /// Delete a habit and its whole history.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if self.doc.habits.remove(name).is_none() {
            return Err(ValidationError::UnknownHabit(name.to_string()).into());
        }
        self.store.save(&self.doc)?;
        info!("registry: removed habit '{name}'");
        Ok(())
    }

    /// Record a completion for `date`.
    pub fn mark(&mut self, name: &str, date: NaiveDate) -> Result<MarkOutcome> {
        let habit = self
            .doc
            .habits
            .get_mut(name)
            .ok_or_else(|| ValidationError::UnknownHabit(name.to_string()))?;
        if !habit.insert_date(date) {
            return Ok(MarkOutcome::AlreadyMarked);
        }
        self.store.save(&self.doc)?;
        info!("registry: marked '{name}' done for {date}");
        Ok(MarkOutcome::Marked)
    }

    /// Remove a completion for `date`.
    pub fn unmark(&mut self, name: &str, date: NaiveDate) -> Result<UnmarkOutcome> {
        let habit = self
            .doc
            .habits
            .get_mut(name)
            .ok_or_else(|| ValidationError::UnknownHabit(name.to_string()))?;
        if !habit.remove_date(date) {
            return Ok(UnmarkOutcome::NotMarked);
        }
        self.store.save(&self.doc)?;
        info!("registry: unmarked '{name}' for {date}");
        Ok(UnmarkOutcome::Unmarked)
    }
}
