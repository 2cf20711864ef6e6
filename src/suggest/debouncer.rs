use std::time::{Duration, Instant};

use crate::config::DEFAULT_DEBOUNCE_MS;

/// Collapses bursts of keystrokes into one lookup
///
/// At most one pending execution exists per instance; every new
/// `schedule_execution` supersedes the previous one (last-writer-wins).
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last input that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether there's a pending lookup waiting for the quiet period to expire
    pending_execution: bool,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            last_input_time: None,
            pending_execution: false,
        }
    }

    /// Arm (or re-arm) the quiet-period timer
    pub fn schedule_execution(&mut self) {
        self.last_input_time = Some(Instant::now());
        self.pending_execution = true;
    }

    /// Drop any pending execution without firing it
    pub fn cancel_pending(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    pub fn should_execute(&self) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed() >= self.delay,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
