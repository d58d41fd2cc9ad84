//! Workflow stage tracking across rows.
//!
//! The status column names a stage only on the row where a new block of
//! cases starts; the rows below inherit it. The tracker remembers the last
//! stage seen and carries it forward.

/// Department stages in workflow order.
pub const DEFAULT_STAGES: [&str; 5] = [
    "CONFECCIÓN",
    "REVISIÓN",
    "JEFATURA",
    "SUBGERENCIA",
    "GERENCIA",
];

#[derive(Debug, Clone)]
pub struct StatusTracker {
    labels: Vec<String>,
    current: String,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new(
            DEFAULT_STAGES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_STAGES[0],
        )
    }
}

impl StatusTracker {
    pub fn new(labels: Vec<String>, initial: impl Into<String>) -> Self {
        Self {
            labels,
            current: initial.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Feed one row's status cell text and return the stage in effect.
    ///
    /// Text containing any stage label (case-sensitive) replaces the current
    /// stage with the trimmed text, extra words included. Anything else
    /// leaves it unchanged. Earlier stages may reappear.
    pub fn observe(&mut self, status_text: &str) -> &str {
        if self.recognizes(status_text) {
            self.current = status_text.trim().to_string();
        }
        &self.current
    }

    fn recognizes(&self, text: &str) -> bool {
        !text.trim().is_empty() && self.labels.iter().any(|label| text.contains(label.as_str()))
    }
}
