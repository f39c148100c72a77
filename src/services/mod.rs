pub mod advertisement_stream;
pub mod break_schedule;
pub mod monte_carlo;
pub mod parameters_yaml;
pub mod profit_plot;
pub mod random_process;
pub mod results_csv;
pub mod revenue;
pub mod scheduling;
pub mod simulation_types;
pub mod sweep;
