use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the fern logger.
///
/// Output goes to the log file when one is configured, otherwise to stdout.
/// Colors apply only to stdout output on request.
pub fn initialize(
    log_level: cs_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    // File output never gets ANSI colors
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match colors {
                Some(c) => c.color(record.level()).to_string(),
                None => record.level().to_string(),
            };

            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level,
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        });

    let dispatch = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
