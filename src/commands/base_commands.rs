use std::num::NonZeroUsize;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::parameters::{SimulationParameters, StreamPolicy};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Also write log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate yearly profit and payback period for one parameter set
    Simulate {
        /// Parameter YAML file; when given, the parameter flags are ignored
        #[arg(short, long)]
        params: Option<String>,
        /// Output YAML file for the full report
        #[arg(short, long)]
        output: Option<String>,
        /// Number of Monte Carlo iterations
        #[arg(short = 'n', long, default_value_t = 1)]
        iterations: usize,
        /// Run trials on all cores
        #[arg(long)]
        parallel: bool,
        #[command(flatten)]
        parameters: ParameterArgs,
    },
    /// Simulate every break count against every row of the parameter tables
    Sweep {
        /// Sweep YAML file
        #[arg(short, long)]
        input: String,
        /// Output CSV file
        #[arg(short, long)]
        output: String,
        /// Optional PNG chart of profit per break count
        #[arg(long)]
        plot: Option<String>,
        /// Run trials on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ParameterArgs {
    /// Number of breaks in the session
    #[arg(short, long, default_value_t = 1)]
    pub breaks: usize,
    /// Price per advertised minute
    #[arg(long, default_value_t = 300.0)]
    pub price_per_min: f64,
    /// Operating cost per session minute
    #[arg(long, default_value_t = 20.0)]
    pub cost_per_min: f64,
    /// Session length in hours
    #[arg(long, default_value_t = 16.0)]
    pub speaking_time: f64,
    /// Fraction of the session reserved for breaks
    #[arg(long, default_value_t = 0.10)]
    pub ads_percent: f64,
    /// Mean time between advertisement requests in minutes
    #[arg(long, default_value_t = 20.0)]
    pub erlang_mean: f64,
    /// Shortest requested advertisement in minutes
    #[arg(long, default_value_t = 2.5)]
    pub duration_low: f64,
    /// Longest requested advertisement in minutes
    #[arg(long, default_value_t = 3.5)]
    pub duration_high: f64,
    /// Revenue factor for partially placed advertisements
    #[arg(long, default_value_t = 0.9)]
    pub partial_coefficient: f64,
    /// Revenue factor for advertisements not aired immediately
    #[arg(long, default_value_t = 0.7)]
    pub late_coefficient: f64,
    /// Upfront investment to recover
    #[arg(long, default_value_t = 1_000_000.0)]
    pub initial_cost: f64,
    /// Draw this many advertisements per day instead of filling the session
    #[arg(long)]
    pub ads_per_day: Option<NonZeroUsize>,
    /// Simulate 365 separate days instead of scaling one day
    #[arg(long)]
    pub full_run: bool,
    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ParameterArgs {
    pub fn to_parameters(&self) -> SimulationParameters {
        SimulationParameters {
            num_breaks: self.breaks,
            price_per_min: self.price_per_min,
            cost_per_min: self.cost_per_min,
            speaking_time: self.speaking_time,
            ads_percent: self.ads_percent,
            erlang_mean: self.erlang_mean,
            duration_low: self.duration_low,
            duration_high: self.duration_high,
            partial_addition_coefficient: self.partial_coefficient,
            late_addition_coefficient: self.late_coefficient,
            initial_cost: self.initial_cost,
            stream_policy: match self.ads_per_day {
                Some(count) => StreamPolicy::Count(count.get()),
                None => StreamPolicy::Budget,
            },
            fast_run: !self.full_run,
            seed: self.seed,
            ..SimulationParameters::default()
        }
    }
}
