//! Ring Logger
//!
//! A `log` backend that keeps the most recent formatted lines in a bounded
//! in-memory ring and forwards every line to the browser console
//! (stderr on native targets).

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger with a fixed-capacity ring of recent lines
pub struct RingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    fn lines(&self) -> MutexGuard<'_, VecDeque<String>> {
        match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Recent lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.lines().iter().cloned().collect()
    }

    /// The last `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        let lines = self.lines();
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&self, line: String) {
        let mut lines = self.lines();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// `HH:MM:SS.mmm LEVEL target: message`
pub fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a `RingLogger` as the global logger.
///
/// Returns the installed logger so callers can read back recent lines.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RingLogger, SetLoggerError> {
    let logger: &'static RingLogger = Box::leak(Box::new(RingLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
