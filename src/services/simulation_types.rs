use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::statistics::{AveragePlacementStats, PlacementStats};

/// Result of one simulated broadcast day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutcome {
    pub revenue: f64,
    pub operating_cost: f64,
    pub profit: f64,
    pub placed_minutes: f64,
    pub advertisements: usize,
    pub stats: PlacementStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyEstimate {
    pub profit: f64,
    pub stats: PlacementStats,
}

/// Years needed to recover the initial investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payback {
    Years(u64),
    NotProfitable,
}

impl Payback {
    /// `floor(initial_cost / average_profit) + 1` years, or
    /// [`Payback::NotProfitable`] when the average profit is not positive.
    /// Horizons beyond `u64::MAX` saturate.
    pub fn from_average_profit(initial_cost: f64, average_profit: f64) -> Self {
        if average_profit > 0.0 {
            let whole_years = (initial_cost / average_profit).floor() as u64;
            Payback::Years(whole_years.saturating_add(1))
        } else {
            Payback::NotProfitable
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Years(years) => write!(f, "{years}"),
            Payback::NotProfitable => write!(f, "no"),
        }
    }
}

impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payback::Years(years) => serializer.serialize_u64(*years),
            Payback::NotProfitable => serializer.serialize_str("no"),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub num_breaks: usize,
    pub iterations: usize,
    pub fast_run: bool,
    pub seed: Option<u64>,
    pub avg_profit: f64,
    pub years_to_profit: Payback,
    pub avg_stats: AveragePlacementStats,
    pub yearly_profits: Vec<f64>,
}
