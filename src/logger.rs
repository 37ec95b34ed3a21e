use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;
use std::path::Path;

use crate::config::LoggingConfig;

/// Initializes the global logger.
///
/// Call once at the start of the binary. Library code only uses the `log` facade.
///
/// The level comes from `RUST_LOG` (e.g. `RUST_LOG=debug court-assign ...`); if it is unset or
/// unparsable the configured level is used. Logs go to stderr and to `<log_dir>/<log_file>`.
pub fn init(config: &LoggingConfig) {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Failed to create log directory at '{}': {}", config.log_dir, e);
    }

    let log_file_path = Path::new(&config.log_dir).join(&config.log_file);

    let log_level_filter = std::env::var("RUST_LOG").ok().and_then(|level| level.parse::<LevelFilter>().ok()).unwrap_or(config.level);

    let base_config = Dispatch::new().level(log_level_filter).level_for("serde", LevelFilter::Warn);

    let console_config = Dispatch::new()
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = base_config.chain(console_config);

    match fern::log_file(&log_file_path) {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                })
                .chain(file);
            dispatch = dispatch.chain(file_config);
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}. Logging to console only.", log_file_path.display(), e),
    }

    // A logger may already be installed (tests, embedding applications).
    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    log::info!("Logger initialized. Logging to console and '{}'.", log_file_path.display());
}
