//! Infinite-population approximation.
//!
//! The allele count is iterated through the selection/mutation
//! update until the per-generation increment drops below
//! [`CONVERGENCE_THRESHOLD`], giving both the curve and the
//! horizon that the finite-population runs are replayed over.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::common::{SimParams, INITIAL_CAPACITY};
use crate::error::ParameterError;
use crate::trajectory::Trajectory;

pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Convergence is not checked until after this many generations.
pub const MIN_GENERATIONS: u32 = 10;

/// How the per-generation increment is compared against
/// [`CONVERGENCE_THRESHOLD`].
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConvergenceRule {
    /// `delta < threshold`. Any decrease counts as converged,
    /// however large.
    #[default]
    Signed,
    /// `|delta| < threshold`.
    Absolute,
}

impl ConvergenceRule {
    pub fn is_converged(self, delta: f64) -> bool {
        match self {
            ConvergenceRule::Signed => delta < CONVERGENCE_THRESHOLD,
            ConvergenceRule::Absolute => delta.abs() < CONVERGENCE_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeterministicRun {
    pub trajectory: Trajectory,
    /// Generation at which iteration stopped, or
    /// [`SimParams::generation_bound`] if it never converged.
    pub horizon: u32,
    pub converged: bool,
}

pub fn solve(params: SimParams, rule: ConvergenceRule) -> Result<DeterministicRun, ParameterError> {
    let params = params.validate()?;
    let bound = params.generation_bound();
    let popsize = params.popsize as f64;

    let mut trajectory = Trajectory::with_capacity(bound.min(INITIAL_CAPACITY) as usize);
    let mut n = 0.0;
    let mut horizon = bound;
    let mut converged = false;

    for t in 1..bound {
        let next = popsize * params.next_frequency(n);
        let delta = next - n;
        n = next;
        trajectory.push(t, n);
        trace!(t, n, delta, "deterministic step");
        if t > MIN_GENERATIONS && rule.is_converged(delta) {
            horizon = t;
            converged = true;
            break;
        }
    }

    debug!(
        popsize = params.popsize,
        horizon,
        converged,
        final_count = n,
        "deterministic trajectory done"
    );

    Ok(DeterministicRun {
        trajectory,
        horizon,
        converged,
    })
}
