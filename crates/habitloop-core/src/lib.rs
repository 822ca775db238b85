//! # Habitloop Core Library
//!
//! Core business logic for Habitloop, a personal habit tracker with a
//! built-in Pomodoro focus timer. The `habitloop` binary is a thin
//! interactive menu over this crate.
//!
//! ## Architecture
//!
//! - **Store**: flat-file JSON persistence of the habit document,
//!   rewritten whole after every mutation
//! - **Registry**: named habits and their completion dates, with explicit
//!   outcome values for no-op mutations
//! - **Streaks**: pure consecutive-day streak computation over completion
//!   dates, anchored to an injectable "today"
//! - **Reporting**: summary, bounded history, weekly progress and CSV
//!   export views
//! - **Timer**: caller-driven countdown state machine with cooperative
//!   cancellation
//!
//! ## Key Components
//!
//! - [`HabitRegistry`]: habit mutations over the persisted document
//! - [`Store`]: document load/save
//! - [`streaks`]: streak analyzer
//! - [`PomodoroEngine`]: countdown state machine

pub mod error;
pub mod model;
pub mod registry;
pub mod report;
pub mod store;
pub mod streak;
pub mod timer;

pub use error::{CoreError, Result, StoreError, ValidationError};
pub use model::{Document, Habit};
pub use registry::{HabitRegistry, MarkOutcome, UnmarkOutcome};
pub use report::{HabitSummary, WeekBucket};
pub use store::Store;
pub use streak::{streaks, StreakSummary};
pub use timer::{CancelToken, Phase, PomodoroEngine, PomodoroPlan, Tick, TimerState};
