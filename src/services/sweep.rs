use thiserror::Error;

use crate::domain::sweep::{ParameterGroup, SweepPlan};
use crate::services::monte_carlo::{SimulationError, simulate_from_parameters};
use crate::services::simulation_types::Payback;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("run {run} with {num_breaks} breaks failed: {source}")]
    Simulation {
        run: usize,
        num_breaks: usize,
        source: SimulationError,
    },
}

/// One engine invocation of a sweep, flattened for tables and export.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub run: usize,
    pub num_breaks: usize,
    /// Signed average yearly profit as reported by the engine.
    pub avg_profit: f64,
    pub years_to_profit: Payback,
    pub group: ParameterGroup,
}

impl SweepResult {
    /// Profit as shown to users: losses are displayed as zero.
    pub fn total_profit(&self) -> f64 {
        self.avg_profit.max(0.0)
    }
}

/// Runs the engine once per break count and parameter group, break count
/// outermost.
pub fn run_sweep(plan: &SweepPlan, parallel: bool) -> Result<Vec<SweepResult>, SweepError> {
    if plan.iterations == 0 {
        return Err(SweepError::InvalidIterations);
    }

    let groups = plan.groups();
    let mut results = Vec::with_capacity(groups.len() * (plan.min_breaks..=plan.max_breaks).count());
    for num_breaks in plan.min_breaks..=plan.max_breaks {
        for group in &groups {
            let params = plan.parameters_for(group, num_breaks);
            let report = simulate_from_parameters(&params, plan.iterations, parallel).map_err(
                |source| SweepError::Simulation {
                    run: group.run,
                    num_breaks,
                    source,
                },
            )?;
            results.push(SweepResult {
                run: group.run,
                num_breaks,
                avg_profit: report.avg_profit,
                years_to_profit: report.years_to_profit,
                group: group.clone(),
            });
        }
    }
    Ok(results)
}

/// Results regrouped by run number, each run in break-count order.
pub fn results_by_run(results: &[SweepResult]) -> Vec<(usize, Vec<&SweepResult>)> {
    let mut runs: Vec<(usize, Vec<&SweepResult>)> = Vec::new();
    for result in results {
        match runs.iter_mut().find(|(run, _)| *run == result.run) {
            Some((_, rows)) => rows.push(result),
            None => runs.push((result.run, vec![result])),
        }
    }
    runs.sort_by_key(|(run, _)| *run);
    for (_, rows) in &mut runs {
        rows.sort_by_key(|row| row.num_breaks);
    }
    runs
}

/// The result with the highest average profit, if any.
pub fn best_result(results: &[SweepResult]) -> Option<&SweepResult> {
    results
        .iter()
        .max_by(|a, b| a.avg_profit.partial_cmp(&b.avg_profit).unwrap_or(std::cmp::Ordering::Equal))
}
