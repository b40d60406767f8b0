//! Logger utility for application-wide logging
//!
//! This module provides a logger implementation for the standard log crate
//! that writes `[LEVEL] message` lines to stderr, or to any other writer.

use std::io::{self, Write};
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// Destination for log lines
    sink: Mutex<Box<dyn Write + Send>>,
    /// Most verbose level that is written
    level: LevelFilter,
}

impl Logger {
    /// Creates a logger writing to stderr
    ///
    /// # Arguments
    ///
    /// * `level` - Most verbose level to write
    pub fn new(level: LevelFilter) -> Self {
        Logger::with_writer(Box::new(io::stderr()), level)
    }

    /// Creates a logger writing to the given sink
    pub fn with_writer(writer: Box<dyn Write + Send>, level: LevelFilter) -> Self {
        Logger {
            sink: Mutex::new(writer),
            level,
        }
    }

    /// Writes one line to the sink
    ///
    /// # Arguments
    ///
    /// * `message` - The message to write
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut sink = self.sink.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger sink poisoned"))?;
        writeln!(sink, "{}", message)?;
        sink.flush()
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(level: LevelFilter) {
        // We only call this once at startup
        if log::set_boxed_logger(Box::new(Logger::new(level))).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
