use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::services::sweep::SweepResult;

#[derive(Error, Debug)]
pub enum ResultsCsvError {
    #[error("failed to write results csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush results csv: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ResultRecord {
    #[serde(rename = "Run")]
    run: usize,
    #[serde(rename = "Number of Breaks")]
    num_breaks: usize,
    #[serde(rename = "Total Profit")]
    total_profit: f64,
    #[serde(rename = "Years")]
    years: String,
    #[serde(rename = "Price per Min")]
    price_per_min: f64,
    #[serde(rename = "Cost per Min")]
    cost_per_min: f64,
    #[serde(rename = "Speaking Time")]
    speaking_time: f64,
    #[serde(rename = "Ads Percent")]
    ads_percent: f64,
    #[serde(rename = "Erlang Mean")]
    erlang_mean: f64,
    #[serde(rename = "Duration Low")]
    duration_low: f64,
    #[serde(rename = "Duration High")]
    duration_high: f64,
    #[serde(rename = "Partial Addition Coefficient")]
    partial_addition_coefficient: f64,
    #[serde(rename = "Late Addition Coefficient")]
    late_addition_coefficient: f64,
}

impl From<&SweepResult> for ResultRecord {
    fn from(result: &SweepResult) -> Self {
        let group = &result.group;
        Self {
            run: result.run,
            num_breaks: result.num_breaks,
            total_profit: result.total_profit(),
            years: result.years_to_profit.to_string(),
            price_per_min: group.cost.price_per_min,
            cost_per_min: group.cost.cost_per_min,
            speaking_time: group.session.speaking_time,
            ads_percent: group.session.ads_percent,
            erlang_mean: group.time.erlang_mean,
            duration_low: group.time.duration_low,
            duration_high: group.time.duration_high,
            partial_addition_coefficient: group.cost.partial_addition_coefficient,
            late_addition_coefficient: group.cost.late_addition_coefficient,
        }
    }
}

/// Writes one row per sweep result, with a header row.
pub fn write_results_csv<W: Write>(writer: W, results: &[SweepResult]) -> Result<(), ResultsCsvError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(ResultRecord::from(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_results_csv_file(path: &str, results: &[SweepResult]) -> Result<(), ResultsCsvError> {
    let file = std::fs::File::create(path)?;
    write_results_csv(file, results)
}
