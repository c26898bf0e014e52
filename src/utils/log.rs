use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{self, Dispatch};

use crate::components::config::Config;

/// Sets up the global logger from `config`.
///
/// Records always go to stderr; stdout belongs to the faults themselves
/// (`null-deref-read` prints the value it read). When `CRASHME_LOG_FILE` is set
/// the records are also appended to that file.
pub fn init_log(config: &Config) -> Result<(), fern::InitError> {
    let mut dispatch = Dispatch::new().level(config.log_level());

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let stderr_dispatch = Dispatch::new()
        .format(move |callback, args, record| {
            callback.finish(format_args!(
                "{} |CRASHME|{:5}| {}",
                Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                args
            ))
        })
        .chain(std::io::stderr());

    if let Some(log_file_path) = config.log_file() {
        let file_dispatch = Dispatch::new()
            .format(|callback, args, record| {
                callback.finish(format_args!(
                    "{} |CRASHME-{:5}| {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    args,
                ))
            })
            .chain(fern::log_file(log_file_path)?);
        dispatch = dispatch.chain(file_dispatch);
    }

    dispatch.chain(stderr_dispatch).apply()?;
    Ok(())
}

#[macro_export]
macro_rules! crashme_debug {
    ($($arg:tt)+) => (
        ::log::debug!(target: "CRASHME", $($arg)+)
    );
}

#[macro_export]
macro_rules! crashme_info {
    ($($arg:tt)+) => (
        ::log::info!(target: "CRASHME", $($arg)+)
    );
}

#[macro_export]
macro_rules! crashme_error {
    ($($arg:tt)+) => (
        ::log::error!(target: "CRASHME", $($arg)+)
    );
}

#[macro_export]
macro_rules! crashme_warn {
    ($($arg:tt)+) => (
        ::log::warn!(target: "CRASHME", $($arg)+)
    );
}
