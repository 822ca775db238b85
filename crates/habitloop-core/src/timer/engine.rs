//! Tick-driven pomodoro countdown engine.
//!
//! The engine owns no thread and never sleeps. The caller invokes
//! `tick()` once per elapsed second and renders the result, so tests can
//! drive a whole session to completion instantly. A shared [`CancelToken`]
//! is checked on every tick; an in-flight countdown stops within one tick
//! of cancellation and the session does not resume or skip ahead.
//!
//! ## State Transitions
//!
//! ```text
//! Running -> (Finished | Cancelled)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use super::plan::{PomodoroPlan, Step};

/// Shareable cancellation flag checked by the engine on every tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Running,
    Finished,
    Cancelled,
}

/// What one tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second elapsed within the current step.
    Counting { step: Step, remaining_secs: u64 },
    /// The current step hit zero and the next one is up.
    StepFinished { finished: Step, next: Step },
    /// The final step hit zero; the session is over.
    SessionFinished,
    /// The token was cancelled; the session stops here.
    Cancelled,
}

/// Core countdown state machine.
#[derive(Debug)]
pub struct PomodoroEngine {
    steps: Vec<Step>,
    step_index: usize,
    remaining_secs: u64,
    state: TimerState,
    token: CancelToken,
}

impl PomodoroEngine {
    /// Build an engine over the plan's steps. A plan with zero cycles is
    /// finished before the first tick.
    pub fn new(plan: &PomodoroPlan, token: CancelToken) -> Self {
        let steps = plan.steps();
        let remaining_secs = steps.first().map(|s| s.duration_secs).unwrap_or(0);
        let state = if steps.is_empty() {
            TimerState::Finished
        } else {
            TimerState::Running
        };
        Self {
            steps,
            step_index: 0,
            remaining_secs,
            state,
            token,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn current_step(&self) -> Option<Step> {
        self.steps.get(self.step_index).copied()
    }

    /// Remaining time in the current step.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Account for one elapsed second.
    pub fn tick(&mut self) -> Tick {
        match self.state {
            TimerState::Finished => return Tick::SessionFinished,
            TimerState::Cancelled => return Tick::Cancelled,
            TimerState::Running => {}
        }
        if self.token.is_cancelled() {
            self.state = TimerState::Cancelled;
            info!("timer: session cancelled at step {}", self.step_index);
            return Tick::Cancelled;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            let step = self.steps[self.step_index];
            return Tick::Counting {
                step,
                remaining_secs: self.remaining_secs,
            };
        }

        let finished = self.steps[self.step_index];
        match self.steps.get(self.step_index + 1).copied() {
            Some(next) => {
                self.step_index += 1;
                self.remaining_secs = next.duration_secs;
                Tick::StepFinished { finished, next }
            }
            None => {
                self.state = TimerState::Finished;
                info!("timer: session finished after {} step(s)", self.steps.len());
                Tick::SessionFinished
            }
        }
    }
}

/// Render a second count as a `MM:SS` countdown clock.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::plan::Phase;

    fn minute_plan(cycles: u64) -> PomodoroPlan {
        PomodoroPlan {
            work_min: 1,
            break_min: 1,
            cycles,
        }
    }

    #[test]
    fn session_finishes_after_work_plus_break_seconds() {
        let mut engine = PomodoroEngine::new(&minute_plan(1), CancelToken::new());
        assert_eq!(engine.state(), TimerState::Running);

        // 59 counting ticks, then the work step completes into the break.
        for _ in 0..59 {
            assert!(matches!(engine.tick(), Tick::Counting { .. }));
        }
        match engine.tick() {
            Tick::StepFinished { finished, next } => {
                assert_eq!(finished.phase, Phase::Work);
                assert_eq!(next.phase, Phase::Break);
            }
            other => panic!("expected StepFinished, got {other:?}"),
        }

        for _ in 0..59 {
            assert!(matches!(engine.tick(), Tick::Counting { .. }));
        }
        assert_eq!(engine.tick(), Tick::SessionFinished);
        assert_eq!(engine.state(), TimerState::Finished);
    }

    #[test]
    fn two_cycles_run_four_steps() {
        let mut engine = PomodoroEngine::new(&minute_plan(2), CancelToken::new());
        let mut transitions = 0;
        loop {
            match engine.tick() {
                Tick::StepFinished { .. } => transitions += 1,
                Tick::SessionFinished => break,
                Tick::Counting { .. } => {}
                Tick::Cancelled => panic!("unexpected cancellation"),
            }
        }
        assert_eq!(transitions, 3);
    }

    #[test]
    fn cancellation_stops_the_next_tick() {
        let token = CancelToken::new();
        let mut engine = PomodoroEngine::new(&minute_plan(1), token.clone());
        assert!(matches!(engine.tick(), Tick::Counting { .. }));

        token.cancel();
        assert_eq!(engine.tick(), Tick::Cancelled);
        assert_eq!(engine.state(), TimerState::Cancelled);

        // Terminal: further ticks keep reporting cancellation.
        assert_eq!(engine.tick(), Tick::Cancelled);
    }

    #[test]
    fn zero_cycles_is_finished_immediately() {
        let mut engine = PomodoroEngine::new(&minute_plan(0), CancelToken::new());
        assert_eq!(engine.state(), TimerState::Finished);
        assert_eq!(engine.tick(), Tick::SessionFinished);
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(3599), "59:59");
    }
}
