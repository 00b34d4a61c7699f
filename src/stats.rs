use metrics::{counter, Counter};

use crate::error::FieldError;

/// Counters for one validation run. Handles are resolved against the recorder installed
/// when the run starts.
pub struct FormMetrics {
    // Number of documents validated with a set of form rules
    pub documents: Counter,

    // Number of single field checks (one per rule applied to a field)
    pub checks: Counter,
}

impl FormMetrics {
    pub fn new() -> Self {
        Self {
            documents: counter!("field_rules.documents"),
            checks: counter!("field_rules.checks"),
        }
    }

    pub fn record_rejection(&self, error: &FieldError) {
        counter!("field_rules.rejections", "reason" => error.code()).increment(1);
    }
}

impl Default for FormMetrics {
    fn default() -> Self {
        Self::new()
    }
}
