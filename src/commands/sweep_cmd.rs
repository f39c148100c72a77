use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_sweep_tables;
use crate::services::parameters_yaml::load_sweep_from_yaml_file;
use crate::services::profit_plot::write_profit_plot_png;
use crate::services::results_csv::write_results_csv_file;
use crate::services::sweep::run_sweep;

pub fn sweep_command(cmd: Commands) -> ExitCode {
    let Commands::Sweep {
        input,
        output,
        plot,
        parallel,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let plan = match load_sweep_from_yaml_file(&input) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Failed to load sweep: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let results = match run_sweep(&plan, parallel) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Failed to run sweep: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_sweep_tables(&results));

    if let Err(e) = write_results_csv_file(&output, &results) {
        eprintln!("Failed to write results: {e:?}");
        return ExitCode::FAILURE;
    }
    println!("Sweep results written to {output}");

    if let Some(plot) = plot {
        if let Err(e) = write_profit_plot_png(&plot, &results) {
            eprintln!("Failed to plot profit: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Profit plot written to {plot}");
    }
    ExitCode::SUCCESS
}
