use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::parameters::{SimulationParameters, StreamPolicy};
use crate::domain::sweep::{CostRow, SessionRow, SweepPlan, TimeRow};

#[derive(Error, Debug)]
pub enum ParameterYamlError {
    #[error("failed to read parameter yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse parameter yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("ads_per_day must be greater than zero")]
    InvalidAdCount,
    #[error("invalid break range {min}..={max}")]
    InvalidBreakRange { min: usize, max: usize },
    #[error("parameter table {0} has no rows")]
    EmptyTable(&'static str),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParametersRecord {
    num_breaks: Option<usize>,
    price_per_min: Option<f64>,
    cost_per_min: Option<f64>,
    speaking_time: Option<f64>,
    ads_percent: Option<f64>,
    erlang_shape: Option<f64>,
    erlang_mean: Option<f64>,
    duration_low: Option<f64>,
    duration_high: Option<f64>,
    partial_addition_coefficient: Option<f64>,
    late_addition_coefficient: Option<f64>,
    fast_run: Option<bool>,
    seed: Option<u64>,
    initial_cost: Option<f64>,
    ads_per_day: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SweepRecord {
    breaks: Option<BreakRangeRecord>,
    fast_run: Option<bool>,
    iterations: Option<usize>,
    seed: Option<u64>,
    cost_parameters: Option<Vec<CostRecord>>,
    session_parameters: Option<Vec<SessionRecord>>,
    time_parameters: Option<Vec<TimeRecord>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BreakRangeRecord {
    min: usize,
    max: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CostRecord {
    price_per_min: f64,
    cost_per_min: f64,
    partial_addition_coefficient: f64,
    late_addition_coefficient: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionRecord {
    speaking_time: f64,
    ads_percent: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimeRecord {
    erlang_mean: f64,
    duration_low: f64,
    duration_high: f64,
}

pub fn load_parameters_from_yaml_file(
    path: &str,
) -> Result<SimulationParameters, ParameterYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_parameters_from_yaml_str(&contents)
}

/// Parses a parameter file. Missing fields keep their defaults; an empty
/// document yields the default parameters.
pub fn deserialize_parameters_from_yaml_str(
    input: &str,
) -> Result<SimulationParameters, ParameterYamlError> {
    let record: ParametersRecord = if input.trim().is_empty() {
        ParametersRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };
    parameters_from_record(record)
}

fn parameters_from_record(
    record: ParametersRecord,
) -> Result<SimulationParameters, ParameterYamlError> {
    let defaults = SimulationParameters::default();
    let stream_policy = match record.ads_per_day {
        None => StreamPolicy::Budget,
        Some(0) => return Err(ParameterYamlError::InvalidAdCount),
        Some(count) => StreamPolicy::Count(count),
    };

    Ok(SimulationParameters {
        num_breaks: record.num_breaks.unwrap_or(defaults.num_breaks),
        price_per_min: record.price_per_min.unwrap_or(defaults.price_per_min),
        cost_per_min: record.cost_per_min.unwrap_or(defaults.cost_per_min),
        speaking_time: record.speaking_time.unwrap_or(defaults.speaking_time),
        ads_percent: record.ads_percent.unwrap_or(defaults.ads_percent),
        erlang_shape: record.erlang_shape.unwrap_or(defaults.erlang_shape),
        erlang_mean: record.erlang_mean.unwrap_or(defaults.erlang_mean),
        duration_low: record.duration_low.unwrap_or(defaults.duration_low),
        duration_high: record.duration_high.unwrap_or(defaults.duration_high),
        partial_addition_coefficient: record
            .partial_addition_coefficient
            .unwrap_or(defaults.partial_addition_coefficient),
        late_addition_coefficient: record
            .late_addition_coefficient
            .unwrap_or(defaults.late_addition_coefficient),
        fast_run: record.fast_run.unwrap_or(defaults.fast_run),
        seed: record.seed.or(defaults.seed),
        initial_cost: record.initial_cost.unwrap_or(defaults.initial_cost),
        stream_policy,
    })
}

pub fn load_sweep_from_yaml_file(path: &str) -> Result<SweepPlan, ParameterYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_sweep_from_yaml_str(&contents)
}

/// Parses a sweep file. Omitted tables fall back to a single row of default
/// values; tables that are present must not be empty.
pub fn deserialize_sweep_from_yaml_str(input: &str) -> Result<SweepPlan, ParameterYamlError> {
    let record: SweepRecord = serde_yaml::from_str(input)?;
    let defaults = SweepPlan::default();

    let (min_breaks, max_breaks) = match record.breaks {
        Some(range) => (range.min, range.max),
        None => (defaults.min_breaks, defaults.max_breaks),
    };
    if min_breaks == 0 || min_breaks > max_breaks {
        return Err(ParameterYamlError::InvalidBreakRange {
            min: min_breaks,
            max: max_breaks,
        });
    }

    let cost_rows = table_rows(record.cost_parameters, "cost_parameters", defaults.cost_rows, |r| {
        CostRow {
            price_per_min: r.price_per_min,
            cost_per_min: r.cost_per_min,
            partial_addition_coefficient: r.partial_addition_coefficient,
            late_addition_coefficient: r.late_addition_coefficient,
        }
    })?;
    let session_rows = table_rows(
        record.session_parameters,
        "session_parameters",
        defaults.session_rows,
        |r| SessionRow {
            speaking_time: r.speaking_time,
            ads_percent: r.ads_percent,
        },
    )?;
    let time_rows = table_rows(record.time_parameters, "time_parameters", defaults.time_rows, |r| {
        TimeRow {
            erlang_mean: r.erlang_mean,
            duration_low: r.duration_low,
            duration_high: r.duration_high,
        }
    })?;

    Ok(SweepPlan {
        min_breaks,
        max_breaks,
        fast_run: record.fast_run.unwrap_or(defaults.fast_run),
        iterations: record.iterations.unwrap_or(defaults.iterations),
        seed: record.seed,
        cost_rows,
        session_rows,
        time_rows,
    })
}

fn table_rows<R, T>(
    records: Option<Vec<R>>,
    name: &'static str,
    default_rows: Vec<T>,
    convert: impl Fn(R) -> T,
) -> Result<Vec<T>, ParameterYamlError> {
    match records {
        None => Ok(default_rows),
        Some(records) if records.is_empty() => Err(ParameterYamlError::EmptyTable(name)),
        Some(records) => Ok(records.into_iter().map(convert).collect()),
    }
}
