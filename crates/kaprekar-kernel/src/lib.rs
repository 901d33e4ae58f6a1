//! # kaprekar-kernel: Functional core of the Kaprekar routine
//!
//! Kaprekar's routine sorts the digits of a fixed-width number descending and
//! ascending, subtracts the smaller permutation from the larger, and repeats.
//! Every 3-digit number that is not a repdigit reaches 495, every such
//! 4-digit number reaches 6174.
//!
//! ## Key Principles
//!
//! - **No IO**: The kernel never prints, logs, or reads anything
//! - **No randomness**: Seeds are chosen by the caller
//! - **Pure functions**: `run(state) -> Result<state, error>`
//!
//! ## Architecture
//!
//! - [`digits`]: Fixed-width, zero-padded digit strings (`Digits`, `Width`)
//! - [`state`]: The per-run state (`RoutineState`) and its `Step`s
//! - [`kernel`]: `initialize`, `step` and `run`
//!
//! ## Example
//!
//! ```
//! use kaprekar_kernel::{KaprekarError, initialize, run};
//!
//! let state = run(initialize(3524)?)?;
//! for step in state.steps() {
//!     println!("{} - {} = {}", step.descending, step.ascending, step.result);
//! }
//!
//! assert!(matches!(initialize(50), Err(KaprekarError::InvalidInput { .. })));
//! # Ok::<(), KaprekarError>(())
//! ```

pub mod digits;
pub mod kernel;
pub mod state;


// Re-export commonly used items
pub use digits::{Digits, InvalidWidth, ParseDigitsError, Width};
pub use kernel::{
    Expected, KaprekarError, MAX_ITERATIONS, initialize, initialize_with_width, kaprekar, next_step,
    run, step,
};
pub use state::{Phase, RoutineState, Step};
