//! Finite-population runs.
//!
//! Each generation is a binomial draw of `P` offspring whose
//! success probability comes from the same selection/mutation
//! update the deterministic solver iterates.

use rand::prelude::Rng;
use rand_distr::Binomial;
use tracing::{debug, trace};

use crate::common::{SimParams, INITIAL_CAPACITY};
use crate::error::ParameterError;
use crate::trajectory::Trajectory;

/// Number of copies of the variant among `popsize` offspring
/// when each carries it with probability `p`.
pub fn binomial_draw<R: Rng + ?Sized>(
    popsize: u32,
    p: f64,
    rng: &mut R,
) -> Result<u64, ParameterError> {
    let dist = Binomial::new(popsize as u64, p).map_err(|_| ParameterError::InvalidProbability(p))?;
    Ok(rng.sample(dist))
}

/// Sample a trajectory over generations `0..horizon`.
///
/// There is no convergence check: the run always covers the
/// whole horizon, so the result has exactly `horizon` points.
/// A zero horizon is rejected.
pub fn sample<R: Rng + ?Sized>(
    params: SimParams,
    horizon: u32,
    rng: &mut R,
) -> Result<Trajectory, ParameterError> {
    let params = params.validate()?;
    if horizon == 0 {
        return Err(ParameterError::EmptyHorizon);
    }
    let mut trajectory = Trajectory::with_capacity(horizon.min(INITIAL_CAPACITY) as usize);
    let mut n = 0.0;
    for t in 1..horizon {
        let p = params.next_frequency(n);
        n = binomial_draw(params.popsize, p, rng)? as f64;
        trajectory.push(t, n);
        trace!(t, n, p, "stochastic step");
    }
    debug!(
        popsize = params.popsize,
        horizon,
        final_count = n,
        "stochastic trajectory done"
    );
    Ok(trajectory)
}
