//! File logging for the resolver binary
//!
//! The library only talks to the `log` facade. The binary installs a
//! `FileLogger` so JSON output on stdout stays clean.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable overriding the log level, e.g. `debug` or `trace`
pub const LOG_LEVEL_ENV: &str = "CSS_ABBREVIATION_LOG";

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open `file_path` for logging, truncating earlier runs
    pub fn new(file_path: &Path, level: LevelFilter) -> io::Result<Self> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(FileLogger {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{}] [{}] [{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Default log file in the platform local data directory
pub fn default_log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .ok_or("Could not determine local data directory")?;

    Ok(data_dir.join("CssAbbreviationResolver").join("resolver.log"))
}

/// Level from `CSS_ABBREVIATION_LOG`, or `fallback` when unset or invalid
pub fn level_from_env(fallback: LevelFilter) -> LevelFilter {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

/// Install the global file logger
pub fn init_logger(file_path: Option<PathBuf>, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = match file_path {
        Some(path) => path,
        None => default_log_file_path()?,
    };
    let logger = FileLogger::new(&file_path, level)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(level))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &FileLogger, level: log::Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("resolver")
                .build(),
        );
    }

    #[test]
    fn test_file_logger_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("resolver.log");
        let logger = FileLogger::new(&path, LevelFilter::Info).unwrap();

        record_at(&logger, log::Level::Info, "resolved 3 nodes");
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[INFO] [resolver] resolved 3 nodes"));
    }

    #[test]
    fn test_file_logger_filters_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolver.log");
        let logger = FileLogger::new(&path, LevelFilter::Info).unwrap();

        record_at(&logger, log::Level::Debug, "hidden");
        record_at(&logger, log::Level::Warn, "shown");

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("hidden"));
        assert!(content.contains("shown"));
    }
}
