use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

use crate::domain::parameters::{DAYS_PER_YEAR, SimulationParameters, StreamPolicy};
use crate::domain::statistics::{AveragePlacementStats, PlacementStats};
use crate::services::advertisement_stream::generate_advertisements;
use crate::services::break_schedule::{ScheduleError, create_breaks};
use crate::services::random_process::{
    AdSampler, RandomProcessGenerator, SamplingError, duration_distribution, erlang_distribution,
};
use crate::services::revenue::placement_revenue;
use crate::services::scheduling::place_advertisement;
use crate::services::simulation_types::{DailyOutcome, Payback, SimulationReport, YearlyEstimate};

/// Upper bound on the expected number of requests the budget stream draws per
/// day. Means small enough to exceed it would never finish a day.
pub const MAX_EXPECTED_ADS_PER_DAY: f64 = 100_000.0;

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error("invalid break configuration: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("invalid distribution parameters: {0}")]
    Sampling(#[from] SamplingError),
    #[error("initial cost must be finite and non-negative, got {0}")]
    InvalidInitialCost(f64),
    #[error("mean interarrival time {mean} would draw about {expected:.0} ads per day")]
    ArrivalRateTooHigh { mean: f64, expected: f64 },
}

/// Runs the engine once for `params`; a convenience over [`MonteCarloRunner`].
pub fn simulate_from_parameters(
    params: &SimulationParameters,
    iterations: usize,
    parallel: bool,
) -> Result<SimulationReport, SimulationError> {
    MonteCarloRunner::new(params.clone())?
        .with_parallel(parallel)
        .run(iterations)
}

/// Simulates one broadcast day: a fresh advertisement stream is placed into a
/// fresh break schedule and priced.
pub fn simulate_day<S: AdSampler + ?Sized>(
    params: &SimulationParameters,
    sampler: &mut S,
) -> Result<DailyOutcome, ScheduleError> {
    let mut schedule = create_breaks(params.speaking_time, params.ads_percent, params.num_breaks)?;
    let ads = generate_advertisements(sampler, params.stream_policy, params.session_minutes());

    let mut not_added = 0;
    for ad in &ads {
        if place_advertisement(ad, &mut schedule).is_rejected() {
            not_added += 1;
        }
    }

    let revenue: f64 = schedule
        .placements()
        .map(|placement| placement_revenue(placement, params))
        .sum();
    let operating_cost = params.daily_operating_cost();
    let profit = revenue - operating_cost;
    log::debug!(
        "Day with {} ads: revenue {:.2}, profit {:.2}",
        ads.len(),
        revenue,
        profit
    );

    Ok(DailyOutcome {
        revenue,
        operating_cost,
        profit,
        placed_minutes: schedule.placed_minutes(),
        advertisements: ads.len(),
        stats: schedule.tally(not_added),
    })
}

/// One year of broadcasting: a single day scaled by 365 in fast-run mode,
/// otherwise the exact sum of 365 simulated days.
pub fn simulate_year<S: AdSampler + ?Sized>(
    params: &SimulationParameters,
    sampler: &mut S,
) -> Result<YearlyEstimate, ScheduleError> {
    if params.fast_run {
        let day = simulate_day(params, sampler)?;
        return Ok(YearlyEstimate {
            profit: day.profit * DAYS_PER_YEAR as f64,
            stats: day.stats.scaled(DAYS_PER_YEAR as u64),
        });
    }

    let mut profit = 0.0;
    let mut stats = PlacementStats::default();
    for _ in 0..DAYS_PER_YEAR {
        let day = simulate_day(params, sampler)?;
        profit += day.profit;
        stats += day.stats;
    }
    Ok(YearlyEstimate { profit, stats })
}

/// Repeats the yearly estimate over independent trials and averages them.
///
/// Each trial owns a `StdRng` seeded from a per-trial seed. The seeds are
/// drawn in trial order from one master generator, so a seeded run gives the
/// same report whether trials execute sequentially or in parallel.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    params: SimulationParameters,
    parallel: bool,
}

impl MonteCarloRunner {
    /// Validates the break layout, both distributions, the arrival rate and
    /// the initial cost before any sampling.
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        create_breaks(params.speaking_time, params.ads_percent, params.num_breaks)?;
        erlang_distribution(params.erlang_shape, params.erlang_mean)?;
        duration_distribution(params.duration_low, params.duration_high)?;
        if params.stream_policy == StreamPolicy::Budget {
            let expected = params.session_minutes() / params.erlang_mean;
            if !(expected <= MAX_EXPECTED_ADS_PER_DAY) {
                return Err(SimulationError::ArrivalRateTooHigh {
                    mean: params.erlang_mean,
                    expected,
                });
            }
        }
        if !(params.initial_cost.is_finite() && params.initial_cost >= 0.0) {
            return Err(SimulationError::InvalidInitialCost(params.initial_cost));
        }
        Ok(Self {
            params,
            parallel: false,
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn run(&self, iterations: usize) -> Result<SimulationReport, SimulationError> {
        let mut master = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(iterations, &mut master)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        iterations: usize,
        rng: &mut R,
    ) -> Result<SimulationReport, SimulationError> {
        if iterations == 0 {
            return Err(SimulationError::InvalidIterations);
        }
        log::info!(
            "Simulating {} breaks over {} iterations ({} run)",
            self.params.num_breaks,
            iterations,
            if self.params.fast_run { "fast" } else { "full" }
        );

        let trial_seeds: Vec<u64> = (0..iterations).map(|_| rng.next_u64()).collect();
        let yearly: Vec<YearlyEstimate> = if self.parallel {
            trial_seeds
                .par_iter()
                .map(|seed| self.run_trial(*seed))
                .collect::<Result<_, _>>()?
        } else {
            trial_seeds
                .iter()
                .map(|seed| self.run_trial(*seed))
                .collect::<Result<_, _>>()?
        };

        let yearly_profits: Vec<f64> = yearly.iter().map(|year| year.profit).collect();
        let yearly_stats: Vec<PlacementStats> = yearly.iter().map(|year| year.stats).collect();
        let avg_profit = yearly_profits.iter().sum::<f64>() / iterations as f64;
        let years_to_profit = Payback::from_average_profit(self.params.initial_cost, avg_profit);
        log::info!(
            "Average yearly profit {:.2}, payback {}",
            avg_profit,
            years_to_profit
        );

        Ok(SimulationReport {
            num_breaks: self.params.num_breaks,
            iterations,
            fast_run: self.params.fast_run,
            seed: self.params.seed,
            avg_profit,
            years_to_profit,
            avg_stats: AveragePlacementStats::mean_of(&yearly_stats),
            yearly_profits,
        })
    }

    fn run_trial(&self, seed: u64) -> Result<YearlyEstimate, SimulationError> {
        let mut generator = RandomProcessGenerator::new(
            StdRng::seed_from_u64(seed),
            self.params.erlang_shape,
            self.params.erlang_mean,
            self.params.duration_low,
            self.params.duration_high,
        )?;
        Ok(simulate_year(&self.params, &mut generator)?)
    }
}
