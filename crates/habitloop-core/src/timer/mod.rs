//! Pomodoro timer: session plan and tick-driven countdown engine.
//!
//! Independent of habit data. The CLI drives [`PomodoroEngine::tick`] once
//! per second of real time; tests drive it without waiting.

mod engine;
mod plan;

pub use engine::{format_clock, CancelToken, PomodoroEngine, Tick, TimerState};
pub use plan::{
    Phase, PomodoroPlan, Step, DEFAULT_BREAK_MIN, DEFAULT_CYCLES, DEFAULT_WORK_MIN,
};
