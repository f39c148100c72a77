use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Initializes the global logger.
///
/// The level comes from `RUST_LOG` (for example `RUST_LOG=debug`) and
/// defaults to `info`. Console output goes to stderr so that reports written
/// to stdout stay clean; `log_file` additionally appends plain lines to a file.
pub fn init(log_file: Option<&str>) {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level_filter = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console_config = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = Dispatch::new()
        .level(log_level_filter)
        .level_for("plotters", LevelFilter::Warn)
        .chain(console_config);

    if let Some(path) = log_file {
        match fern::log_file(path) {
            Ok(file) => {
                dispatch = dispatch.chain(
                    Dispatch::new()
                        .format(|out, message, record| {
                            out.finish(format_args!(
                                "[{} {} {}] {}",
                                Local::now().format("%Y-%m-%d %H:%M:%S"),
                                record.level(),
                                record.target(),
                                message
                            ))
                        })
                        .chain(file),
                );
            }
            Err(e) => eprintln!("Failed to open log file '{path}': {e}"),
        }
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {e}");
    }
}
