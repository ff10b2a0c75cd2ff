//! Wright-Fisher trajectories of a single selected, mutating allele.
//!
//! A run iterates the infinite-population recurrence to find how
//! long the allele count takes to settle, then replays the same
//! selection/mutation update in a finite population with binomial
//! sampling over that horizon.

use rand::prelude::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub mod chart;
pub mod common;
pub mod deterministic;
pub mod error;
pub mod report;
pub mod stochastic;
pub mod trajectory;

pub use common::SimParams;
pub use deterministic::ConvergenceRule;
pub use error::{ChartError, ParameterError};
pub use trajectory::{Point, Trajectory};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub params: SimParams,
    pub convergence: ConvergenceRule,
    pub horizon: u32,
    pub deterministic: Trajectory,
    pub stochastic: Trajectory,
}

/// One deterministic curve shared by several finite-population runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplicatedResult {
    pub params: SimParams,
    pub convergence: ConvergenceRule,
    pub horizon: u32,
    pub deterministic: Trajectory,
    pub replicates: Vec<Trajectory>,
}

pub fn simulate<R: Rng + ?Sized>(
    params: SimParams,
    rng: &mut R,
) -> Result<SimulationResult, ParameterError> {
    simulate_with(params, ConvergenceRule::default(), rng)
}

pub fn simulate_with<R: Rng + ?Sized>(
    params: SimParams,
    convergence: ConvergenceRule,
    rng: &mut R,
) -> Result<SimulationResult, ParameterError> {
    let ReplicatedResult {
        params,
        convergence,
        horizon,
        deterministic,
        mut replicates,
    } = simulate_replicates(params, convergence, 1, rng)?;
    let stochastic = replicates.pop().unwrap_or_default();
    Ok(SimulationResult {
        params,
        convergence,
        horizon,
        deterministic,
        stochastic,
    })
}

/// Seeds a fresh generator for this run only.
pub fn simulate_seeded(params: SimParams, seed: u64) -> Result<SimulationResult, ParameterError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    simulate(params, &mut rng)
}

pub fn simulate_replicates<R: Rng + ?Sized>(
    params: SimParams,
    convergence: ConvergenceRule,
    replicates: usize,
    rng: &mut R,
) -> Result<ReplicatedResult, ParameterError> {
    let run = deterministic::solve(params, convergence)?;
    let replicates = (0..replicates)
        .map(|_| stochastic::sample(params, run.horizon, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ReplicatedResult {
        params,
        convergence,
        horizon: run.horizon,
        deterministic: run.trajectory,
        replicates,
    })
}
