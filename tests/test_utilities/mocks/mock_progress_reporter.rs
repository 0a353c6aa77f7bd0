use qf_inspect::prelude::*;
use std::sync::{Arc, Mutex};

/// One `report_progress` call as seen by the observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressCall {
    pub current: usize,
    pub total: usize,
    pub item_code: Option<String>,
}

/// Mock ProgressReporter that records every observer call
///
/// Clones share the same log, so a clone can be handed to a use case and
/// inspected afterwards.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    progress: Arc<Mutex<Vec<ProgressCall>>>,
    completions: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain and error messages, in call order
    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn progress_calls(&self) -> Vec<ProgressCall> {
        self.progress.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.progress.lock().unwrap().push(ProgressCall {
            current,
            total,
            item_code: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}
