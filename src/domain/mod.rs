pub mod advertisement;
pub mod break_window;
pub mod parameters;
pub mod statistics;
pub mod sweep;
