//! Console Logger
//!
//! `log` backend for browser frontends. Lines go to the devtools console on
//! wasm32 (stderr elsewhere) and the most recent ones are kept in a circular
//! buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-size line buffer, oldest lines dropped first
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// Last `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<LineBuffer>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(LineBuffer::new(capacity)),
        }
    }

    /// `[HH:MM:SS.mmm LEVEL app::target] message`
    pub fn format_line(&self, record: &Record) -> String {
        format!(
            "[{} {:<5} {}::{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.read(LineBuffer::snapshot)
    }

    pub fn recent_tail(&self, n: usize) -> Vec<String> {
        self.read(|buffer| buffer.tail(n))
    }

    fn read<R>(&self, f: impl FnOnce(&LineBuffer) -> R) -> R {
        match self.buffer.lock() {
            Ok(buffer) => f(&buffer),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn remember(&self, line: String) {
        match self.buffer.lock() {
            Ok(mut buffer) => buffer.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Last `n` captured lines, oldest first. Empty before init.
pub fn recent_tail(n: usize) -> Vec<String> {
    LOGGER.get().map(|logger| logger.recent_tail(n)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LineBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.snapshot(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_last_line() {
        let mut buffer = LineBuffer::new(0);
        buffer.push("only".to_string());
        buffer.push("latest".to_string());
        assert_eq!(buffer.snapshot(), vec!["latest".to_string()]);
    }

    #[test]
    fn test_tail_returns_newest_in_order() {
        let mut buffer = LineBuffer::new(4);
        for line in ["a", "b", "c"] {
            buffer.push(line.to_string());
        }

        assert_eq!(buffer.tail(2), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.tail(10).len(), 3);
        assert!(buffer.tail(0).is_empty());
    }

    #[test]
    fn test_init_captures_lines() {
        init_logger("RecipeUi", LevelFilter::Info).expect("logger init");
        log::info!(target: "app", "mounted");
        log::debug!(target: "app", "below level");

        let lines = recent_tail(DEFAULT_CAPACITY);
        assert!(lines.iter().any(|line| line.ends_with("mounted")));
        assert!(!lines.iter().any(|line| line.ends_with("below level")));

        log::error!(target: "admin", "fetch failed");
        let tail = recent_tail(1);
        assert_eq!(tail.len(), 1);
        assert!(tail[0].ends_with("fetch failed"));
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger::new("RecipeUi", LevelFilter::Warn, 8);

        logger.log(
            &Record::builder()
                .args(format_args!("hidden"))
                .level(Level::Info)
                .target("admin")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("delete failed"))
                .level(Level::Error)
                .target("admin")
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("RecipeUi::admin"));
        assert!(lines[0].ends_with("delete failed"));
    }
}
