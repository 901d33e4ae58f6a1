//! The kernel - pure functional core of the Kaprekar routine.
//!
//! No IO, no clocks, no randomness: the same seed always produces the same
//! steps. Callers supply the seed and decide what to do with the result.
//!
//! # Example
//!
//! ```
//! use kaprekar_kernel::{initialize, run};
//!
//! let state = run(initialize(3524)?)?;
//! assert_eq!(state.iteration_count(), 3);
//! assert_eq!(state.current().to_string(), "6174");
//! # Ok::<(), kaprekar_kernel::KaprekarError>(())
//! ```

use std::fmt;

use crate::digits::{Digits, Width};
use crate::state::{RoutineState, Step};

/// Safety bound on the number of steps in one run.
///
/// Non-repdigit seeds converge in at most 7 steps; only a repdigit (or a
/// broken permutation) can get anywhere near this.
pub const MAX_ITERATIONS: usize = 1000;

/// Validates a seed and creates a fresh state for it.
///
/// Seeds in `100..=999` run at width 3 towards 495, seeds in `1000..=9999`
/// at width 4 towards 6174.
pub fn initialize(n: u32) -> Result<RoutineState, KaprekarError> {
    let invalid = || KaprekarError::InvalidInput {
        value: n,
        expected: Expected::AnyWidth,
    };
    let width = Width::for_value(n).ok_or_else(invalid)?;
    let value = u16::try_from(n).map_err(|_| invalid())?;
    let start = Digits::new(value, width).ok_or_else(invalid)?;

    Ok(fresh(start))
}

/// Like [`initialize`], but only accepts seeds of the given width.
///
/// `initialize_with_width(495, Width::Four)` fails even though 495 is a
/// valid 3-digit seed.
pub fn initialize_with_width(n: u32, width: Width) -> Result<RoutineState, KaprekarError> {
    let invalid = || KaprekarError::InvalidInput {
        value: n,
        expected: Expected::Width(width),
    };
    if !width.seed_range().contains(&n) {
        return Err(invalid());
    }
    let value = u16::try_from(n).map_err(|_| invalid())?;
    let start = Digits::new(value, width).ok_or_else(invalid)?;

    Ok(fresh(start))
}

fn fresh(start: Digits) -> RoutineState {
    let state = RoutineState::new(start);

    // Postcondition: fresh state has no history
    debug_assert_eq!(state.iteration_count(), 0);
    // Postcondition: target matches the width
    debug_assert_eq!(state.target().width(), state.current().width());

    state
}

/// Computes the next step from the state's current value.
///
/// Pure: the state is not modified.
pub fn step(state: &RoutineState) -> Step {
    next_step(state.current())
}

/// Computes one application of the routine to `current`.
pub fn next_step(current: Digits) -> Step {
    let ascending = current.sorted_ascending();
    let descending = current.sorted_descending();

    // Invariant: the descending permutation is never the smaller one
    assert!(
        descending.value() >= ascending.value(),
        "descending permutation {descending} smaller than ascending {ascending}"
    );

    let result = descending.difference(ascending);

    Step {
        ascending,
        descending,
        result,
    }
}

/// Applies steps until the state converges on Kaprekar's constant.
///
/// The convergence check runs before every step, so an already-converged
/// state is returned unchanged. Fails with
/// [`KaprekarError::IterationLimitExceeded`] once more than
/// [`MAX_ITERATIONS`] steps have been taken; the partial run is dropped.
pub fn run(state: RoutineState) -> Result<RoutineState, KaprekarError> {
    run_with_limit(state, MAX_ITERATIONS)
}

/// [`run`] with an explicit step bound: fails once more than `limit` steps
/// have been taken, so a run needing exactly `limit` steps still succeeds.
pub(crate) fn run_with_limit(
    mut state: RoutineState,
    limit: usize,
) -> Result<RoutineState, KaprekarError> {
    let width = state.width();

    while !state.is_converged() {
        let next = step(&state);
        state = state.with_step(next);

        // Invariant: every step keeps the run's width
        debug_assert_eq!(state.current().width(), width);

        if state.iteration_count() > limit {
            return Err(KaprekarError::IterationLimitExceeded {
                start: state.start(),
                limit,
            });
        }
    }

    // Postcondition: one recorded step per iteration, ending on the target
    debug_assert_eq!(
        state.steps().last().map_or(state.start(), |s| s.result),
        state.target()
    );

    Ok(state)
}

/// Initializes and runs the routine for `n` in one call.
pub fn kaprekar(n: u32) -> Result<RoutineState, KaprekarError> {
    run(initialize(n)?)
}

/// The seed widths an entry point accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Either 3 or 4 digits.
    AnyWidth,
    Width(Width),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::AnyWidth => f.write_str("3-digit or 4-digit"),
            Expected::Width(width) => write!(f, "{width}-digit"),
        }
    }
}

/// Errors that can occur while running the routine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KaprekarError {
    #[error("number {value} must be a {expected} integer")]
    InvalidInput { value: u32, expected: Expected },

    #[error("exceeded maximum iterations ({limit}) from {start}, possible infinite loop")]
    IterationLimitExceeded { start: Digits, limit: usize },
}
