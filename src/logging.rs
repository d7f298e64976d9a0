use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::{Level, LevelFilter};

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }

    /// Get the verbosity level from the presence of the debug flag
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

/// Renders one log line as `[LEVEL] message`
pub fn format_line(level: Level, message: &str) -> String {
    format!("[{:<5}] {}", level, message)
}

/// Builds the dispatcher writing every record to stderr
///
/// Nothing is installed here; the caller decides when (and whether) the
/// dispatcher becomes the global logger.
pub fn build_dispatch(verbosity: LogLevel, colored: bool) -> Dispatch {
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            let line = format_line(record.level(), &message.to_string());
            if colored {
                out.finish(format_args!(
                    "\x1B[{}m{}\x1B[0m",
                    colors_line.get_color(&record.level()).to_fg_str(),
                    line
                ))
            } else {
                out.finish(format_args!("{line}"))
            }
        })
        .level(verbosity.to_level_filter())
        .chain(std::io::stderr())
}

/// Initialise the logger with the specified verbosity level
pub fn init_logger(verbosity: LogLevel) -> Result<()> {
    build_dispatch(verbosity, atty::is(atty::Stream::Stderr)).apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}
