//! Plain-text and JSON output of a replicated run.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::ReplicatedResult;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Whitespace-separated columns, one row per generation
    #[default]
    Table,
    Json,
}

pub fn write_report<W: Write>(
    result: &ReplicatedResult,
    format: Format,
    out: W,
) -> std::io::Result<()> {
    match format {
        Format::Table => write_table(result, out),
        Format::Json => write_json(result, out),
    }
}

/// Columns are `t`, the deterministic count, then one column
/// per replicate. Generations a trajectory does not reach are
/// written as `NA`.
pub fn write_table<W: Write>(result: &ReplicatedResult, mut out: W) -> std::io::Result<()> {
    write!(out, "t\tinfinite")?;
    for i in 0..result.replicates.len() {
        write!(out, "\tfinite_{i}")?;
    }
    writeln!(out)?;

    let rows = result
        .replicates
        .iter()
        .map(|r| r.len())
        .chain(std::iter::once(result.deterministic.len()))
        .max()
        .unwrap_or(0);

    for t in 0..rows as u32 {
        write!(out, "{t}")?;
        match result.deterministic.count_at(t) {
            Some(n) => write!(out, "\t{n:.6}")?,
            None => write!(out, "\tNA")?,
        }
        for r in &result.replicates {
            match r.count_at(t) {
                Some(n) => write!(out, "\t{n}")?,
                None => write!(out, "\tNA")?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn write_json<W: Write>(result: &ReplicatedResult, mut out: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, result)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{simulate_replicates, ConvergenceRule, SimParams};
    use rand::SeedableRng;

    fn small_result() -> ReplicatedResult {
        let mut rng = rand::rngs::StdRng::seed_from_u64(17);
        let params = SimParams::new(10, 1.0, 0.0, 0.0);
        simulate_replicates(params, ConvergenceRule::Signed, 2, &mut rng).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let result = small_result();
        let mut buffer = vec![];
        write_report(&result, Format::Table, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "t\tinfinite\tfinite_0\tfinite_1");
        // Deterministic run has one more point than the replicates
        assert_eq!(lines.len(), 1 + result.deterministic.len());
        assert_eq!(lines[1], "0\t0.000000\t0\t0");
        assert!(lines.last().unwrap().ends_with("\tNA\tNA"));
    }

    #[test]
    fn test_json_round_trip() {
        let result = small_result();
        let mut buffer = vec![];
        write_report(&result, Format::Json, &mut buffer).unwrap();
        let parsed: ReplicatedResult = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, result);
    }
}
