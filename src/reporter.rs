//! Progress reporting for long-running research invocations
//!
//! The research service can take minutes per request, so the client emits
//! transient status lines while a call is in flight. The sink is injected
//! so library embedders (agent hosts, CLIs, tests) decide where the lines
//! go. Reporting is fire-and-forget: no return value, and implementations
//! must not panic.

use std::sync::Mutex;

use colored::Colorize;

/// Sink for operator-visible status lines
pub trait ProgressReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Routes progress lines to the log file
#[derive(Debug, Default)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// Prints progress lines to stderr for interactive CLI use
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message.cyan());
    }
}

/// Discards all progress lines
#[derive(Debug, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report(&self, _message: &str) {}
}

/// Collects progress lines in memory so tests can assert on them
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ProgressReporter for MemoryReporter {
    fn report(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
