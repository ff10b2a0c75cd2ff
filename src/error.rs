use thiserror::Error;

/// Rejected simulation inputs.
///
/// Validation happens before any generation is computed,
/// so no partial trajectory is ever produced alongside one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("population size must be positive")]
    EmptyPopulation,
    #[error("population size {popsize} exceeds the maximum of {max}")]
    PopulationTooLarge { popsize: u32, max: u32 },
    #[error("selection coefficient must be finite and non-negative, got {0}")]
    InvalidSelection(f64),
    #[error("forward mutation rate (mu) must lie in [0, 1], got {0}")]
    InvalidForwardMutation(f64),
    #[error("backward mutation rate (nu) must lie in [0, 1], got {0}")]
    InvalidBackwardMutation(f64),
    #[error("sampling horizon must be at least one generation")]
    EmptyHorizon,
    #[error("binomial success probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Failure while drawing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart needs a positive horizon and population size")]
    EmptyDomain,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}
