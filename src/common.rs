use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Generations are bounded by this multiple of the population size.
pub const HORIZON_FACTOR: u32 = 10;

/// Largest accepted population size.
///
/// A run that never converges stores `HORIZON_FACTOR * popsize`
/// points, so this bounds a trajectory at 10^7 points (160 MB).
pub const MAX_POPSIZE: u32 = 1_000_000;

/// Initial trajectory allocation; longer runs grow the buffer.
pub(crate) const INITIAL_CAPACITY: u32 = 1024;

/// Parameters of a single run.
///
/// The defaults match the values the interactive
/// chart starts out with.
#[derive(clap::Args, Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Population size (P)
    #[arg(long = "popsize", short = 'p', default_value_t = 100)]
    pub popsize: u32,
    /// Relative fitness of the tracked variant (s)
    #[arg(long = "selection", short = 's', default_value_t = 1.01)]
    pub selection: f64,
    /// Mutation rate towards the variant
    #[arg(long = "mu", default_value_t = 0.01)]
    pub mu: f64,
    /// Mutation rate away from the variant
    #[arg(long = "nu", default_value_t = 0.01)]
    pub nu: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            popsize: 100,
            selection: 1.01,
            mu: 0.01,
            nu: 0.01,
        }
    }
}

fn is_rate(x: f64) -> bool {
    x.is_finite() && (0.0..=1.0).contains(&x)
}

impl SimParams {
    pub fn new(popsize: u32, selection: f64, mu: f64, nu: f64) -> Self {
        Self {
            popsize,
            selection,
            mu,
            nu,
        }
    }

    pub fn validate(self) -> Result<Self, ParameterError> {
        if self.popsize == 0 {
            return Err(ParameterError::EmptyPopulation);
        }
        if self.popsize > MAX_POPSIZE {
            return Err(ParameterError::PopulationTooLarge {
                popsize: self.popsize,
                max: MAX_POPSIZE,
            });
        }
        if !self.selection.is_finite() || self.selection < 0.0 {
            return Err(ParameterError::InvalidSelection(self.selection));
        }
        if !is_rate(self.mu) {
            return Err(ParameterError::InvalidForwardMutation(self.mu));
        }
        if !is_rate(self.nu) {
            return Err(ParameterError::InvalidBackwardMutation(self.nu));
        }
        Ok(self)
    }

    /// Exclusive upper bound on the generation index.
    ///
    /// Saturates for population sizes that [`SimParams::validate`]
    /// would reject.
    pub fn generation_bound(&self) -> u32 {
        self.popsize.saturating_mul(HORIZON_FACTOR)
    }

    /// Frequency of the variant after selection acts on
    /// a population carrying `n` copies.
    ///
    /// Returns zero whenever the variant has no fitness
    /// mass (`s * n == 0`), which also covers `n == P`
    /// with `s == 0`, where the ratio would be 0/0.
    pub fn selected_frequency(&self, n: f64) -> f64 {
        let weight = self.selection * n;
        if weight == 0.0 {
            return 0.0;
        }
        weight / (weight + (self.popsize as f64 - n))
    }

    /// Frequency of the variant in the next generation:
    /// selection followed by forward and backward mutation.
    pub fn next_frequency(&self, n: f64) -> f64 {
        let ps = self.selected_frequency(n);
        ((1.0 - self.nu) * ps + self.mu * (1.0 - ps)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_population() {
        let params = SimParams::new(0, 1.0, 0.0, 0.0);
        assert_eq!(params.validate(), Err(ParameterError::EmptyPopulation));
    }

    #[test]
    fn test_rejects_huge_population() {
        let params = SimParams::new(MAX_POPSIZE + 1, 1.0, 0.0, 0.0);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::PopulationTooLarge { .. })
        ));
    }

    #[test]
    fn test_generation_bound_saturates() {
        let params = SimParams::new(u32::MAX, 1.0, 0.0, 0.0);
        assert_eq!(params.generation_bound(), u32::MAX);
        assert_eq!(SimParams::new(7, 1.0, 0.0, 0.0).generation_bound(), 70);
    }

    #[test]
    fn test_rejects_bad_selection() {
        for s in [-0.5, f64::NAN, f64::INFINITY] {
            let params = SimParams::new(10, s, 0.0, 0.0);
            assert!(matches!(
                params.validate(),
                Err(ParameterError::InvalidSelection(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_rates() {
        for rate in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                SimParams::new(10, 1.0, rate, 0.0).validate(),
                Err(ParameterError::InvalidForwardMutation(_))
            ));
            assert!(matches!(
                SimParams::new(10, 1.0, 0.0, rate).validate(),
                Err(ParameterError::InvalidBackwardMutation(_))
            ));
        }
        // Closed interval
        assert!(SimParams::new(10, 1.0, 1.0, 0.0).validate().is_ok());
        assert!(SimParams::new(10, 1.0, 0.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_zero_selection_removes_variant() {
        let params = SimParams::new(10, 0.0, 0.0, 0.0);
        for n in 0..=10 {
            assert_eq!(params.selected_frequency(n as f64), 0.0);
        }
    }

    #[test]
    fn test_fixed_variant_with_zero_selection() {
        // s * n == 0 but P - n == 0 as well
        let params = SimParams::new(5, 0.0, 1.0, 0.0);
        let p = params.next_frequency(5.0);
        assert!(p.is_finite());
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_neutral_selection_is_identity() {
        let params = SimParams::new(100, 1.0, 0.0, 0.0);
        for n in [0.0, 1.0, 37.5, 100.0] {
            assert!((params.selected_frequency(n) - n / 100.0).abs() < 1e-12);
        }
    }

    proptest! {
        #[test]
        fn next_frequency_is_a_probability(
            popsize in 1..10000u32,
            selection in 0.0..10.0f64,
            mu in 0.0..=1.0f64,
            nu in 0.0..=1.0f64,
            fraction in 0.0..=1.0f64,
        ) {
            let params = SimParams::new(popsize, selection, mu, nu);
            let n = fraction * popsize as f64;
            let p = params.next_frequency(n);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
