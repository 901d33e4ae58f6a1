//! Demo configuration.
//!
//! The only configuration source is the command line. Arguments are folded
//! into a [`DemoConfig`] and validated once, before anything runs.

use kaprekar_kernel::Width;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width {0} given more than once")]
    DuplicateWidth(Width),
}

/// Where a run's starting number comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Drawn uniformly from the width's seed range.
    Random(Width),
    /// Used as given; validated by the kernel. With `width` set, only seeds
    /// of that width are accepted.
    Fixed { value: u32, width: Option<Width> },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validated demo settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Runs to perform, in order.
    pub plan: Vec<Seed>,
    /// Seeds the RNG for a reproducible demo. `None` uses OS entropy.
    pub rng_seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            plan: Width::ALL.into_iter().map(Seed::Random).collect(),
            rng_seed: None,
            format: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Builds a configuration from raw CLI values.
    ///
    /// Empty `widths` and `starts` give the default plan: one random 3-digit
    /// run followed by one random 4-digit run. With `starts`, a single width
    /// restricts every start to that width; both widths accept either.
    pub fn from_args(
        widths: &[Width],
        starts: &[u32],
        rng_seed: Option<u64>,
        json: bool,
    ) -> Result<Self, ConfigError> {
        for (i, width) in widths.iter().enumerate() {
            if widths[..i].contains(width) {
                return Err(ConfigError::DuplicateWidth(*width));
            }
        }

        let plan = if !starts.is_empty() {
            let width = match widths {
                [only] => Some(*only),
                _ => None,
            };
            starts
                .iter()
                .map(|&value| Seed::Fixed { value, width })
                .collect()
        } else if !widths.is_empty() {
            widths.iter().copied().map(Seed::Random).collect()
        } else {
            Self::default().plan
        };

        Ok(Self {
            plan,
            rng_seed,
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        })
    }

    /// Returns true if any run draws a random seed.
    pub fn uses_randomness(&self) -> bool {
        self.plan.iter().any(|seed| matches!(seed, Seed::Random(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_gives_three_then_four_digits() {
        let config = DemoConfig::from_args(&[], &[], None, false).unwrap();

        assert_eq!(
            config.plan,
            vec![Seed::Random(Width::Three), Seed::Random(Width::Four)]
        );
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn widths_keep_their_order() {
        let config =
            DemoConfig::from_args(&[Width::Four, Width::Three], &[], Some(7), true).unwrap();

        assert_eq!(
            config.plan,
            vec![Seed::Random(Width::Four), Seed::Random(Width::Three)]
        );
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn starts_replace_random_plan() {
        let config = DemoConfig::from_args(&[], &[3524, 50], None, false).unwrap();

        assert_eq!(
            config.plan,
            vec![
                Seed::Fixed { value: 3524, width: None },
                Seed::Fixed { value: 50, width: None },
            ]
        );
        assert!(!config.uses_randomness());
    }

    #[test]
    fn single_width_restricts_starts() {
        let config = DemoConfig::from_args(&[Width::Four], &[495, 3524], None, false).unwrap();

        assert_eq!(
            config.plan,
            vec![
                Seed::Fixed { value: 495, width: Some(Width::Four) },
                Seed::Fixed { value: 3524, width: Some(Width::Four) },
            ]
        );
    }

    #[test]
    fn both_widths_leave_starts_unrestricted() {
        let config =
            DemoConfig::from_args(&[Width::Three, Width::Four], &[495], None, false).unwrap();

        assert_eq!(config.plan, vec![Seed::Fixed { value: 495, width: None }]);
    }

    #[test]
    fn duplicate_width_is_rejected() {
        assert_eq!(
            DemoConfig::from_args(&[Width::Four, Width::Four], &[], None, false),
            Err(ConfigError::DuplicateWidth(Width::Four))
        );
    }
}
