pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const DAYS_PER_YEAR: usize = 365;

/// How the daily advertisement stream decides when to stop sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamPolicy {
    /// Sample until the next advertisement would end after the session.
    #[default]
    Budget,
    /// Sample exactly this many advertisements.
    Count(usize),
}

/// Commercial and timing parameters of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    pub num_breaks: usize,
    pub price_per_min: f64,
    pub cost_per_min: f64,
    /// Session length in hours.
    pub speaking_time: f64,
    /// Fraction of the session reserved for breaks.
    pub ads_percent: f64,
    pub erlang_shape: f64,
    pub erlang_mean: f64,
    pub duration_low: f64,
    pub duration_high: f64,
    pub partial_addition_coefficient: f64,
    pub late_addition_coefficient: f64,
    pub fast_run: bool,
    pub seed: Option<u64>,
    pub initial_cost: f64,
    pub stream_policy: StreamPolicy,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            num_breaks: 1,
            price_per_min: 300.0,
            cost_per_min: 20.0,
            speaking_time: 16.0,
            ads_percent: 0.10,
            erlang_shape: 2.0,
            erlang_mean: 20.0,
            duration_low: 2.5,
            duration_high: 3.5,
            partial_addition_coefficient: 0.9,
            late_addition_coefficient: 0.7,
            fast_run: true,
            seed: None,
            initial_cost: 1_000_000.0,
            stream_policy: StreamPolicy::Budget,
        }
    }
}

impl SimulationParameters {
    pub fn session_minutes(&self) -> f64 {
        self.speaking_time * MINUTES_PER_HOUR
    }

    /// Fixed operating cost of one broadcast day.
    pub fn daily_operating_cost(&self) -> f64 {
        self.session_minutes() * self.cost_per_min
    }
}
