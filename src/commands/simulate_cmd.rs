use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_report;
use crate::services::monte_carlo::simulate_from_parameters;
use crate::services::parameters_yaml::load_parameters_from_yaml_file;

pub fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        params,
        output,
        iterations,
        parallel,
        parameters,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let parameters = match params {
        Some(path) => match load_parameters_from_yaml_file(&path) {
            Ok(parameters) => parameters,
            Err(e) => {
                eprintln!("Failed to load parameters: {e:?}");
                return ExitCode::FAILURE;
            }
        },
        None => parameters.to_parameters(),
    };

    let report = match simulate_from_parameters(&parameters, iterations, parallel) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Failed to simulate: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_simulation_report(&report));

    if let Some(output) = output {
        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize simulation report: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write simulation report: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Simulation report written to {output}");
    }
    ExitCode::SUCCESS
}
