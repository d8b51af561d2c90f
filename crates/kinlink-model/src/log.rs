//! Injected logging collaborator.
//!
//! Pipeline components take an `&dyn EventLog` instead of writing to a global
//! logger. [`TracingLog`] forwards to `tracing` for real runs and
//! [`MemoryLog`] records events so tests can assert on them.

use std::sync::{Mutex, PoisonError};

pub trait EventLog {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// Detail that is off in normal runs.
    fn debug(&self, _message: &str) {}

    /// Whether [`debug`](EventLog::debug) output goes anywhere; callers check
    /// this before building costly debug messages.
    fn debug_enabled(&self) -> bool {
        false
    }
}

/// Forwards events to `tracing`, tagged with the pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct TracingLog {
    stage: &'static str,
}

impl TracingLog {
    pub const fn new(stage: &'static str) -> Self {
        Self { stage }
    }
}

impl EventLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(stage = self.stage, "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(stage = self.stage, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(stage = self.stage, "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(stage = self.stage, "{message}");
    }

    fn debug_enabled(&self) -> bool {
        tracing::enabled!(tracing::Level::DEBUG)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages logged at `level`, in order.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|event| event.level == level)
            .map(|event| event.message)
            .collect()
    }

    /// True when some event at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages(level)
            .iter()
            .any(|message| message.contains(needle))
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogEvent {
                level,
                message: message.to_string(),
            });
    }
}

impl EventLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn debug_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_records_levels_in_order() {
        let log = MemoryLog::new();
        log.info("read 3 records");
        log.error("unable to access input");
        log.debug("detail");

        let events = log.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].level, LogLevel::Info);
        assert!(log.contains(LogLevel::Error, "unable to access"));
        assert!(!log.contains(LogLevel::Warn, "unable to access"));
        assert_eq!(log.messages(LogLevel::Debug), vec!["detail".to_string()]);
        assert!(log.debug_enabled());
    }

    #[test]
    fn tracing_log_debug_is_off_without_subscriber() {
        assert!(!TracingLog::new("link").debug_enabled());
    }
}
