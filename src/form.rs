use std::borrow::Cow;
use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;
use serde_with::DisplayFromStr;

use crate::error::FieldError;
use crate::field_rule::FieldRule;
use crate::json::number_text;
use crate::path::Path;
use crate::stats::FormMetrics;

/// The rules applied to the value found at `path`. Rules run in order and the first
/// failure is reported.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldRules {
    #[serde_as(as = "DisplayFromStr")]
    pub path: Path<'static>,
    pub rules: Vec<FieldRule>,
}

/// Validates whole form documents (`serde_json::Value`) against per-field rules.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct FormRules {
    fields: Vec<FieldRules>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `rule` to the field at `path`, after the rules already registered for it.
    pub fn field(mut self, path: &str, rule: FieldRule) -> Self {
        let path = Path::parse(path).into_static();
        match self.fields.iter_mut().find(|field| field.path == path) {
            Some(field) => field.rules.push(rule),
            None => self.fields.push(FieldRules {
                path,
                rules: vec![rule],
            }),
        }
        self
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    pub fn validate(&self, document: &Value) -> FormReport {
        let metrics = FormMetrics::new();
        let report = self.check_document(document);
        report.record(&metrics);
        report
    }

    /// Validates every document in parallel. Reports are returned in input order.
    pub fn validate_batch(&self, documents: &[Value]) -> Vec<FormReport> {
        // Metrics are recorded from the calling thread, where the recorder is installed.
        let metrics = FormMetrics::new();
        let reports: Vec<FormReport> = documents
            .par_iter()
            .map(|document| self.check_document(document))
            .collect();
        for report in &reports {
            report.record(&metrics);
        }
        reports
    }

    fn check_document(&self, document: &Value) -> FormReport {
        let mut report = FormReport::default();
        for field in &self.fields {
            let (checks, result) = check_field(field, field.path.lookup(document));
            report.checks += checks;
            if let Err(error) = result {
                report.errors.insert(field.path.to_string(), error);
            }
        }
        report
    }
}

fn check_field(field: &FieldRules, value: Option<&Value>) -> (u64, Result<(), FieldError>) {
    let value = match field_text(value) {
        Ok(value) => value,
        Err(error) => return (1, Err(error)),
    };
    let mut checks = 0;
    for rule in &field.rules {
        checks += 1;
        if let Err(error) = rule.check(value.as_deref()) {
            return (checks, Err(error));
        }
    }
    (checks, Ok(()))
}

/// Text of a scalar form value. Missing and `null` values are empty.
fn field_text(value: Option<&Value>) -> Result<Option<Cow<'_, str>>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(Cow::Borrowed(text))),
        Some(Value::Number(number)) => Ok(Some(Cow::Owned(number_text(number)))),
        Some(Value::Bool(flag)) => Ok(Some(Cow::Owned(flag.to_string()))),
        Some(Value::Array(_) | Value::Object(_)) => {
            Err(FieldError::InvalidFormat { field: "value" })
        }
    }
}

/// Field errors found in one document, keyed by path.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(into = "ReportBody")]
pub struct FormReport {
    errors: BTreeMap<String, FieldError>,
    checks: u64,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, FieldError> {
        &self.errors
    }

    pub fn error(&self, path: &str) -> Option<&FieldError> {
        self.errors.get(path)
    }

    fn record(&self, metrics: &FormMetrics) {
        metrics.documents.increment(1);
        metrics.checks.increment(self.checks);
        for error in self.errors.values() {
            metrics.record_rejection(error);
        }
    }
}

// Wire shape: `{ "ok": bool, "errors": { path: message } }`
#[derive(Serialize)]
struct ReportBody {
    ok: bool,
    errors: BTreeMap<String, String>,
}

impl From<FormReport> for ReportBody {
    fn from(report: FormReport) -> Self {
        ReportBody {
            ok: report.is_valid(),
            errors: report
                .errors
                .iter()
                .map(|(path, error)| (path.clone(), error.to_string()))
                .collect(),
        }
    }
}
