//! Pomodoro session plan: user-provided durations expanded into steps.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_WORK_MIN: u64 = 25;
pub const DEFAULT_BREAK_MIN: u64 = 5;
pub const DEFAULT_CYCLES: u64 = 1;

/// Phase of a pomodoro step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

/// One countdown step of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub phase: Phase,
    /// 1-based cycle this step belongs to.
    pub cycle: u64,
    pub duration_secs: u64,
}

/// Validated session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroPlan {
    pub work_min: u64,
    pub break_min: u64,
    pub cycles: u64,
}

impl Default for PomodoroPlan {
    fn default() -> Self {
        Self {
            work_min: DEFAULT_WORK_MIN,
            break_min: DEFAULT_BREAK_MIN,
            cycles: DEFAULT_CYCLES,
        }
    }
}

impl PomodoroPlan {
    /// Parse raw input strings. Empty input falls back to the default for
    /// that field; anything that is not a whole number rejects the whole
    /// session before any countdown starts.
    pub fn parse(work: &str, brk: &str, cycles: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            work_min: parse_field("work minutes", work, DEFAULT_WORK_MIN)?,
            break_min: parse_field("break minutes", brk, DEFAULT_BREAK_MIN)?,
            cycles: parse_field("cycles", cycles, DEFAULT_CYCLES)?,
        })
    }

    /// Expand into alternating work/break steps, two per cycle, in order.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::with_capacity((self.cycles as usize).saturating_mul(2));
        for cycle in 1..=self.cycles {
            steps.push(Step {
                phase: Phase::Work,
                cycle,
                duration_secs: self.work_min.saturating_mul(60),
            });
            steps.push(Step {
                phase: Phase::Break,
                cycle,
                duration_secs: self.break_min.saturating_mul(60),
            });
        }
        steps
    }
}

fn parse_field(field: &'static str, value: &str, default: u64) -> Result<u64, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    value.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_defaults() {
        let plan = PomodoroPlan::parse("", "  ", "").unwrap();
        assert_eq!(plan, PomodoroPlan::default());
    }

    #[test]
    fn non_integer_input_is_rejected() {
        let err = PomodoroPlan::parse("25", "five", "1").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotAnInteger {
                field: "break minutes",
                ..
            }
        ));
        assert!(PomodoroPlan::parse("2.5", "5", "1").is_err());
        assert!(PomodoroPlan::parse("25", "5", "-1").is_err());
    }

    #[test]
    fn steps_alternate_work_and_break() {
        let plan = PomodoroPlan {
            work_min: 25,
            break_min: 5,
            cycles: 2,
        };
        let steps = plan.steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].phase, Phase::Work);
        assert_eq!(steps[0].cycle, 1);
        assert_eq!(steps[0].duration_secs, 25 * 60);
        assert_eq!(steps[1].phase, Phase::Break);
        assert_eq!(steps[1].duration_secs, 5 * 60);
        assert_eq!(steps[3].cycle, 2);
    }
}
