// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    /// Every line reported, for the log pane.
    pub lines: Vec<String>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, lines: Vec::new(), done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
        self.set_status(s!(msg.trim()));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.lines.push(format!("✓ {}", label));
        self.set_status(format!("Saved {} image(s)", self.done));
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        self.failed += 1;
        self.lines.push(format!("✗ {}: {}", label, err));
    }
    fn finish(&mut self) {
        self.set_status(format!(
            "Download complete: {} saved, {} failed ({} page(s))",
            self.done, self.failed, self.total
        ));
    }
}
