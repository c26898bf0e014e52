use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::LevelFilter;

pub const CRASHME_LOG: &str = "CRASHME_LOG";
pub const CRASHME_LOG_FILE: &str = "CRASHME_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    log_level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Detect `CRASHME_LOG` and `CRASHME_LOG_FILE`; an unset or unparsable
    /// level falls back to INFO.
    pub fn from_env() -> Self {
        Self::from_vars(env::var(CRASHME_LOG).ok(), env::var_os(CRASHME_LOG_FILE))
    }

    pub fn from_vars(level: Option<String>, log_file: Option<OsString>) -> Self {
        let mut config = Config::default();
        if let Some(s) = level {
            match s.parse() {
                Ok(level) => config.log_level = level,
                // The logger is not up yet.
                Err(err) => eprintln!("{} is invalid: {}", CRASHME_LOG, err),
            }
        }
        config.log_file = log_file.filter(|path| !path.is_empty()).map(PathBuf::from);
        config
    }

    pub fn log_level(&self) -> LevelFilter { self.log_level }

    pub fn set_log_level(&mut self, level: LevelFilter) { self.log_level = level; }

    pub fn log_file(&self) -> Option<&Path> { self.log_file.as_deref() }
}
