//! Routine state.
//!
//! A [`RoutineState`] is created by [`initialize`](crate::kernel::initialize)
//! and threaded by value through [`run`](crate::kernel::run). Transitions take
//! ownership of the state and return it (builder pattern), so there is no
//! shared calculator object to leak state between runs.

use serde::Serialize;

use crate::digits::{Digits, Width};

/// One application of the routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub ascending: Digits,
    pub descending: Digits,
    /// `descending - ascending`, padded to the same width.
    pub result: Digits,
}

/// Where a run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// `current` equals Kaprekar's constant. Terminal.
    Converged,
}

/// The state of one routine run.
///
/// Invariants:
/// - `current`, `target` and every step field share `start`'s width
/// - `iteration_count() == steps().len()`
///
/// Serialize-only: a state can be reported but not rebuilt from outside the
/// kernel, so the invariants above hold for every value in existence.
///
/// ```compile_fail
/// let json = r#"{"start":"123","current":"3524","target":"495","steps":[]}"#;
/// let _state: kaprekar_kernel::RoutineState = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineState {
    start: Digits,
    current: Digits,
    target: Digits,
    steps: Vec<Step>,
}

impl RoutineState {
    /// Creates a fresh state seeded with `start`.
    pub(crate) fn new(start: Digits) -> Self {
        Self {
            start,
            current: start,
            target: Digits::constant(start.width()),
            steps: Vec::new(),
        }
    }

    /// The zero-padded seed this run started from.
    pub fn start(&self) -> Digits {
        self.start
    }

    pub fn current(&self) -> Digits {
        self.current
    }

    /// Kaprekar's constant for this run's width.
    pub fn target(&self) -> Digits {
        self.target
    }

    pub fn width(&self) -> Width {
        self.start.width()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps applied so far.
    pub fn iteration_count(&self) -> usize {
        self.steps.len()
    }

    pub fn phase(&self) -> Phase {
        if self.current == self.target {
            Phase::Converged
        } else {
            Phase::Running
        }
    }

    pub fn is_converged(&self) -> bool {
        self.phase() == Phase::Converged
    }

    /// Records `step` and advances `current` to its result.
    ///
    /// Internal to the kernel - external code should use
    /// [`run`](crate::kernel::run).
    pub(crate) fn with_step(mut self, step: Step) -> Self {
        debug_assert_eq!(step.result.width(), self.width());
        self.current = step.result;
        self.steps.push(step);
        self
    }
}
