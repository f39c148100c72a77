use crate::domain::parameters::{SimulationParameters, StreamPolicy};

/// Commercial parameters of one sweep row.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRow {
    pub price_per_min: f64,
    pub cost_per_min: f64,
    pub partial_addition_coefficient: f64,
    pub late_addition_coefficient: f64,
}

/// Session length and break share of one sweep row.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRow {
    pub speaking_time: f64,
    pub ads_percent: f64,
}

/// Arrival and duration parameters of one sweep row.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRow {
    pub erlang_mean: f64,
    pub duration_low: f64,
    pub duration_high: f64,
}

impl Default for CostRow {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            price_per_min: params.price_per_min,
            cost_per_min: params.cost_per_min,
            partial_addition_coefficient: params.partial_addition_coefficient,
            late_addition_coefficient: params.late_addition_coefficient,
        }
    }
}

impl Default for SessionRow {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            speaking_time: params.speaking_time,
            ads_percent: params.ads_percent,
        }
    }
}

impl Default for TimeRow {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            erlang_mean: params.erlang_mean,
            duration_low: params.duration_low,
            duration_high: params.duration_high,
        }
    }
}

/// One parameter combination of a sweep, without the break count.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGroup {
    /// 1-based group number, shared by all break counts of the combination.
    pub run: usize,
    pub cost: CostRow,
    pub session: SessionRow,
    pub time: TimeRow,
}

/// Break-count range crossed with every combination of the three tables.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub min_breaks: usize,
    pub max_breaks: usize,
    pub fast_run: bool,
    pub iterations: usize,
    pub seed: Option<u64>,
    pub cost_rows: Vec<CostRow>,
    pub session_rows: Vec<SessionRow>,
    pub time_rows: Vec<TimeRow>,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            min_breaks: 1,
            max_breaks: 3,
            fast_run: true,
            iterations: 1,
            seed: None,
            cost_rows: vec![CostRow::default()],
            session_rows: vec![SessionRow::default()],
            time_rows: vec![TimeRow::default()],
        }
    }
}

impl SweepPlan {
    pub fn groups(&self) -> Vec<ParameterGroup> {
        let mut groups = Vec::new();
        for cost in &self.cost_rows {
            for session in &self.session_rows {
                for time in &self.time_rows {
                    groups.push(ParameterGroup {
                        run: groups.len() + 1,
                        cost: cost.clone(),
                        session: session.clone(),
                        time: time.clone(),
                    });
                }
            }
        }
        groups
    }

    pub fn parameters_for(&self, group: &ParameterGroup, num_breaks: usize) -> SimulationParameters {
        SimulationParameters {
            num_breaks,
            price_per_min: group.cost.price_per_min,
            cost_per_min: group.cost.cost_per_min,
            speaking_time: group.session.speaking_time,
            ads_percent: group.session.ads_percent,
            erlang_mean: group.time.erlang_mean,
            duration_low: group.time.duration_low,
            duration_high: group.time.duration_high,
            partial_addition_coefficient: group.cost.partial_addition_coefficient,
            late_addition_coefficient: group.cost.late_addition_coefficient,
            fast_run: self.fast_run,
            seed: self.seed,
            stream_policy: StreamPolicy::Budget,
            ..SimulationParameters::default()
        }
    }
}
