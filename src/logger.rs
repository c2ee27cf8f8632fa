//! Logging for the datekit binary.
//!
//! Records emitted through the `log` macros are routed by a `fern` dispatch
//! into a shared [`Logger`], which keeps an in-memory buffer and optionally
//! appends to a log file.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
    write_failed: Arc<AtomicBool>,
}

impl Logger {
    /// In-memory logger without a file
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            file_writer: None,
            write_failed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Build a logger from the `[logging] enabled` flag
    ///
    /// When enabled, entries are also appended to [`Logger::get_log_file_path`].
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Logger appending to the given file
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: true,
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            write_failed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<&Arc<Mutex<BufWriter<File>>>> {
        self.file_writer.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                if let Err(e) = writeln!(writer, "{}", formatted_message) {
                    self.report_write_error(&e);
                }
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Flush buffered file output
    pub fn flush(&self) -> io::Result<()> {
        let Some(writer) = &self.file_writer else {
            return Ok(());
        };
        let mut writer = writer
            .lock()
            .map_err(|_| io::Error::other("log file writer lock poisoned"))?;
        writer.flush().inspect_err(|e| self.report_write_error(e))
    }

    /// Whether any write to the log file has failed
    pub fn has_write_error(&self) -> bool {
        self.write_failed.load(Ordering::Relaxed)
    }

    /// Print the first file write failure to stderr, stay quiet afterwards
    fn report_write_error(&self, err: &io::Error) {
        if !self.write_failed.swap(true, Ordering::Relaxed) {
            eprintln!("datekit: failed to write log file: {}", err);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global logger
///
/// The first call builds the [`Logger`] and, when logging is enabled, hooks
/// it up as the `log` backend. Later calls return the same instance.
pub fn init(config: &LoggingConfig) -> Result<&'static Logger> {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        return Ok(logger);
    }

    let level = config.level_filter()?;
    let logger = GLOBAL_LOGGER.get_or_try_init(|| Logger::from_config(config.enabled))?;

    if logger.is_enabled() {
        let sink = logger.clone();
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{} [{}] {}", record.level(), record.target(), message))
            })
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .context("Failed to install logger")?;
        log::debug!("logging initialised at level {}", level);
    }

    Ok(logger)
}

/// The global logger, if [`init`] has run
pub fn global() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}
