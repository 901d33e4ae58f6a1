//! Demo driver - the imperative shell around the kernel.
//!
//! Picks seeds, runs the kernel, and writes reports. The first failure stops
//! the whole demo; nothing after it runs.

use std::io::{self, Write};

use kaprekar_kernel::{KaprekarError, RoutineState, initialize, initialize_with_width, run};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{DemoConfig, OutputFormat, Seed};
use crate::report::{self, RunReport};
use crate::source::SeedSource;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Kernel(#[from] KaprekarError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Executes every run in `config.plan`, writing the report to `out`.
pub fn run_demo<S, W>(config: &DemoConfig, source: &mut S, out: &mut W) -> Result<(), DemoError>
where
    S: SeedSource,
    W: Write,
{
    match config.format {
        OutputFormat::Text => run_text(config, source, out),
        OutputFormat::Json => run_json(config, source, out),
    }
}

fn run_text<S: SeedSource, W: Write>(
    config: &DemoConfig,
    source: &mut S,
    out: &mut W,
) -> Result<(), DemoError> {
    for (i, seed) in config.plan.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        let (n, state) = resolve(*seed, source)?;
        report::write_header(out, n, state.width())?;

        let state = execute(state)?;
        report::write_steps(out, state.steps())?;
        report::write_summary(out, &state)?;
    }

    out.flush()?;
    Ok(())
}

fn run_json<S: SeedSource, W: Write>(
    config: &DemoConfig,
    source: &mut S,
    out: &mut W,
) -> Result<(), DemoError> {
    let mut reports = Vec::with_capacity(config.plan.len());

    for seed in &config.plan {
        let (_, state) = resolve(*seed, source)?;
        let state = execute(state)?;
        reports.push(RunReport::from(&state));
    }

    report::write_json(out, &reports)?;
    out.flush()?;
    Ok(())
}

/// Picks the starting number for `seed` and initializes a run from it.
fn resolve<S: SeedSource>(
    seed: Seed,
    source: &mut S,
) -> Result<(u32, RoutineState), KaprekarError> {
    match seed {
        Seed::Random(width) => {
            let n = source.seed_for(width);
            Ok((n, initialize_with_width(n, width)?))
        }
        Seed::Fixed { value, width: None } => Ok((value, initialize(value)?)),
        Seed::Fixed {
            value,
            width: Some(width),
        } => Ok((value, initialize_with_width(value, width)?)),
    }
}

/// Runs the routine, logging the outcome.
fn execute(state: RoutineState) -> Result<RoutineState, KaprekarError> {
    debug!(start = %state.start(), width = %state.width(), "running kaprekar routine");

    match run(state) {
        Ok(state) => {
            for (i, step) in state.steps().iter().enumerate() {
                debug!(
                    iteration = i + 1,
                    descending = %step.descending,
                    ascending = %step.ascending,
                    result = %step.result,
                    "step"
                );
            }
            info!(
                start = %state.start(),
                iterations = state.iteration_count(),
                constant = %state.target(),
                "converged"
            );
            Ok(state)
        }
        Err(e) => {
            warn!(error = %e, "routine did not converge");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixedSource, RandSource};
    use kaprekar_kernel::Width;

    fn demo(config: &DemoConfig, seeds: &[u32]) -> (Result<(), DemoError>, String) {
        let mut source = FixedSource::new(seeds.iter().copied());
        let mut out = Vec::new();
        let result = run_demo(config, &mut source, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_plan_runs_three_then_four_digits() {
        let (result, out) = demo(&DemoConfig::default(), &[100, 3524]);

        result.unwrap();
        assert_eq!(
            out,
            "Starting 3-digit number: 100\n\
             Descending: 100 - Ascending: 001 = Result: 099\n\
             Descending: 990 - Ascending: 099 = Result: 891\n\
             Descending: 981 - Ascending: 189 = Result: 792\n\
             Descending: 972 - Ascending: 279 = Result: 693\n\
             Descending: 963 - Ascending: 369 = Result: 594\n\
             Descending: 954 - Ascending: 459 = Result: 495\n\
             It took 6 iterations to reach Kaprekar's constant (495) from 100.\n\
             \n\
             Starting 4-digit number: 3524\n\
             Descending: 5432 - Ascending: 2345 = Result: 3087\n\
             Descending: 8730 - Ascending: 0378 = Result: 8352\n\
             Descending: 8532 - Ascending: 2358 = Result: 6174\n\
             It took 3 iterations to reach Kaprekar's constant (6174) from 3524.\n"
        );
    }

    #[test]
    fn constant_seed_reports_zero_iterations() {
        let config = DemoConfig::from_args(&[], &[495], None, false).unwrap();
        let (result, out) = demo(&config, &[]);

        result.unwrap();
        assert_eq!(
            out,
            "Starting 3-digit number: 495\n\
             It took 0 iterations to reach Kaprekar's constant (495) from 495.\n"
        );
    }

    #[test]
    fn repdigit_stops_demo_after_header() {
        let (result, out) = demo(&DemoConfig::default(), &[222, 3524]);

        assert!(matches!(
            result,
            Err(DemoError::Kernel(KaprekarError::IterationLimitExceeded { .. }))
        ));
        // Partial steps are discarded and the 4-digit run never starts.
        assert_eq!(out, "Starting 3-digit number: 222\n");
    }

    #[test]
    fn invalid_start_fails_before_output() {
        let config = DemoConfig::from_args(&[], &[50], None, false).unwrap();
        let (result, out) = demo(&config, &[]);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "number 50 must be a 3-digit or 4-digit integer");
        assert!(out.is_empty());
    }

    #[test]
    fn width_restricted_start_rejects_other_width() {
        let config = DemoConfig::from_args(&[Width::Four], &[495], None, false).unwrap();
        let (result, out) = demo(&config, &[]);

        assert!(matches!(
            result,
            Err(DemoError::Kernel(KaprekarError::InvalidInput { value: 495, .. }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn width_restricted_start_runs_matching_seed() {
        let config = DemoConfig::from_args(&[Width::Four], &[3524], None, false).unwrap();
        let (result, out) = demo(&config, &[]);

        result.unwrap();
        assert!(out.starts_with("Starting 4-digit number: 3524\n"));
        assert!(out.ends_with("(6174) from 3524.\n"));
    }

    #[test]
    fn json_output_is_one_array() {
        let config = DemoConfig::from_args(&[], &[3524, 495], None, true).unwrap();
        let (result, out) = demo(&config, &[]);

        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["iterations"], 3);
        assert_eq!(value[1]["iterations"], 0);
    }

    #[test]
    fn json_output_is_empty_on_failure() {
        let config = DemoConfig::from_args(&[], &[3524, 1111], None, true).unwrap();
        let (result, out) = demo(&config, &[]);

        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn seeded_demo_is_reproducible() {
        let config =
            DemoConfig::from_args(&[Width::Four, Width::Three], &[], Some(99), false).unwrap();

        let render = || {
            let mut source = RandSource::seeded(99);
            let mut out = Vec::new();
            run_demo(&config, &mut source, &mut out).map(|()| out)
        };

        // A repdigit draw fails both runs identically; compare either way.
        match (render(), render()) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("seeded runs diverged"),
        }
    }
}
