use plotters::prelude::*;
use thiserror::Error;

use crate::services::sweep::{SweepResult, results_by_run};

#[derive(Error, Debug)]
pub enum ProfitPlotError {
    #[error("no sweep results to plot")]
    EmptyResults,
    #[error("failed to render profit plot: {0}")]
    Plot(String),
}

/// Draws total profit against the number of breaks, one line per run.
pub fn write_profit_plot_png(output_path: &str, results: &[SweepResult]) -> Result<(), ProfitPlotError> {
    if results.is_empty() {
        return Err(ProfitPlotError::EmptyResults);
    }
    render_plot_png(output_path, results)
}

fn render_plot_png(output_path: &str, results: &[SweepResult]) -> Result<(), ProfitPlotError> {
    let min_breaks = results.iter().map(|r| r.num_breaks).min().unwrap_or(1) as i32;
    let max_breaks = results.iter().map(|r| r.num_breaks).max().unwrap_or(1) as i32;
    let max_profit = results
        .iter()
        .map(|r| r.total_profit())
        .fold(0.0_f64, f64::max);
    let max_y = if max_profit > 0.0 { max_profit * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Profit vs. Number of Breaks", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(min_breaks - 1..max_breaks + 1, 0.0..max_y)
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Number of Breaks")
        .y_desc("Total Profit")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    for (index, (run, rows)) in results_by_run(results).into_iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let points: Vec<(i32, f64)> = rows
            .iter()
            .map(|row| (row.num_breaks as i32, row.total_profit()))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| ProfitPlotError::Plot(e.to_string()))?
            .label(format!("Run {run}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart
            .draw_series(points.into_iter().map(|point| Circle::new(point, 4, color.filled())))
            .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ProfitPlotError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_are_rejected_before_rendering() {
        let error = write_profit_plot_png("unused.png", &[]).unwrap_err();
        assert!(matches!(error, ProfitPlotError::EmptyResults));
    }
}
