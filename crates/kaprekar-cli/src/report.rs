//! Report rendering.
//!
//! Text output is line-for-line stable; scripts grep it. JSON output carries
//! the same data in one array.

use std::io::{self, Write};

use kaprekar_kernel::{Digits, RoutineState, Step, Width};
use serde::Serialize;

/// Serializable summary of one converged run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub start: Digits,
    pub width: Width,
    pub constant: Digits,
    pub iterations: usize,
    pub steps: Vec<Step>,
}

impl From<&RoutineState> for RunReport {
    fn from(state: &RoutineState) -> Self {
        Self {
            start: state.start(),
            width: state.width(),
            constant: state.target(),
            iterations: state.iteration_count(),
            steps: state.steps().to_vec(),
        }
    }
}

/// Writes the line announcing a run, before the routine starts.
pub fn write_header(out: &mut impl Write, seed: u32, width: Width) -> io::Result<()> {
    writeln!(out, "Starting {width}-digit number: {seed}")
}

/// Writes one line per step.
pub fn write_steps(out: &mut impl Write, steps: &[Step]) -> io::Result<()> {
    for step in steps {
        writeln!(
            out,
            "Descending: {} - Ascending: {} = Result: {}",
            step.descending, step.ascending, step.result
        )?;
    }
    Ok(())
}

/// Writes the closing line of a converged run.
pub fn write_summary(out: &mut impl Write, state: &RoutineState) -> io::Result<()> {
    writeln!(
        out,
        "It took {} iterations to reach Kaprekar's constant ({}) from {}.",
        state.iteration_count(),
        state.target(),
        state.start()
    )
}

/// Writes all reports as one pretty-printed JSON array.
pub fn write_json(out: &mut impl Write, reports: &[RunReport]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaprekar_kernel::kaprekar;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_line() {
        assert_eq!(
            render(|out| write_header(out, 123, Width::Three)),
            "Starting 3-digit number: 123\n"
        );
    }

    #[test]
    fn step_lines_are_zero_padded() {
        let state = kaprekar(3524).unwrap();

        assert_eq!(
            render(|out| write_steps(out, state.steps())),
            "Descending: 5432 - Ascending: 2345 = Result: 3087\n\
             Descending: 8730 - Ascending: 0378 = Result: 8352\n\
             Descending: 8532 - Ascending: 2358 = Result: 6174\n"
        );
    }

    #[test]
    fn summary_line() {
        let state = kaprekar(100).unwrap();

        assert_eq!(
            render(|out| write_summary(out, &state)),
            "It took 6 iterations to reach Kaprekar's constant (495) from 100.\n"
        );
    }

    #[test]
    fn json_report_fields() {
        let state = kaprekar(3524).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &[RunReport::from(&state)]).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["start"], "3524");
        assert_eq!(value[0]["width"], 4);
        assert_eq!(value[0]["constant"], "6174");
        assert_eq!(value[0]["iterations"], 3);
        assert_eq!(value[0]["steps"][1]["ascending"], "0378");
    }
}
