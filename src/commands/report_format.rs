use crate::services::simulation_types::SimulationReport;
use crate::services::sweep::{SweepResult, best_result, results_by_run};

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };
    let mode = if report.fast_run { "fast" } else { "full" };
    let stats = &report.avg_stats;

    let mut lines = Vec::new();
    lines.push("Simulation Report".to_string());
    lines.push(format!("Number of breaks: {}", report.num_breaks));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Run mode: {mode}"));
    lines.push(format!("Seed: {seed}"));
    lines.push(format!("Average yearly profit: {:.2}", report.avg_profit));
    lines.push(format!("Years to profit: {}", report.years_to_profit));
    lines.push(String::new());
    lines.push("Placements per year:".to_string());
    lines.push("Kind | Count".to_string());
    lines.push("-----|------".to_string());
    lines.push(format_stat_row("Not added", stats.not_added));
    lines.push(format_stat_row("Immediately added", stats.immediately_added));
    lines.push(format_stat_row("Not immediately added", stats.not_immediately_added));
    lines.push(format_stat_row("Full addition", stats.full_addition));
    lines.push(format_stat_row("Partial addition", stats.partial_addition));

    lines.join("\n")
}

fn format_stat_row(label: &str, value: f64) -> String {
    format!("{label} | {value:.1}")
}

/// One table per run, followed by the most profitable break count.
pub fn format_sweep_tables(results: &[SweepResult]) -> String {
    let mut lines = Vec::new();
    for (run, rows) in results_by_run(results) {
        let group = &rows[0].group;
        lines.push(format!("Run {run}"));
        lines.push(format!(
            "Price per Min: {}, Cost per Min: {}, Speaking Time: {}, Ads Percent: {}",
            group.cost.price_per_min,
            group.cost.cost_per_min,
            group.session.speaking_time,
            group.session.ads_percent
        ));
        lines.push(format!(
            "Erlang Mean: {}, Duration: {}-{}, Partial Coefficient: {}, Late Coefficient: {}",
            group.time.erlang_mean,
            group.time.duration_low,
            group.time.duration_high,
            group.cost.partial_addition_coefficient,
            group.cost.late_addition_coefficient
        ));
        lines.push("Breaks | Total Profit | Years".to_string());
        lines.push("-------|--------------|------".to_string());
        for row in rows {
            lines.push(format!(
                "{} | {:.2} | {}",
                row.num_breaks,
                row.total_profit(),
                row.years_to_profit
            ));
        }
        lines.push(String::new());
    }

    match best_result(results) {
        Some(best) if best.avg_profit > 0.0 => lines.push(format!(
            "Max profit of {:.2} achieved with {} breaks (run {}).",
            best.avg_profit, best.num_breaks, best.run
        )),
        _ => lines.push("No profitable configuration found.".to_string()),
    }

    lines.join("\n")
}
