use crate::error::{Result as ServerErrorResult, ServerError};

use dd_config::LogLevel;

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Install the global `fern` logger.
///
/// Lines go to `log_file` when set, otherwise to stdout (colored unless
/// `colored` is false). Every line carries an RFC 3339 timestamp.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let output = match log_file.as_deref() {
        Some(path) => Dispatch::new().format(plain_line).chain(open_log_file(path)?),
        None if colored => {
            let colors = level_colors();
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {}",
                        humantime::format_rfc3339(SystemTime::now()),
                        colors.color(record.level()),
                        message,
                    ))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(*log_level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!(
        "Logger initialized: level={}, output={}",
        *log_level,
        log_file
            .as_deref()
            .map_or_else(|| String::from("stdout"), |path| path.display().to_string())
    );

    Ok(())
}

fn plain_line(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        record.level(),
        message,
        record.target(),
        record.line().unwrap_or(0),
    ))
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

pub(crate) fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
