// ── Batch fan-out results ──
//
// File uploads and ad-file linking run as concurrent fan-outs where a
// single failed item must not sink the rest. Instead of logging and
// forgetting, every item's outcome is kept so callers (and tests) can
// see exactly what happened.

use crate::error::CoreError;

/// Outcome of one item in a fan-out.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    /// Human-readable identifier (filename, file id, ...).
    pub label: String,
    pub result: Result<T, CoreError>,
}

impl<T> BatchOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-item results of a concurrent fan-out, in submission order.
#[derive(Debug, Default)]
pub struct BatchReport<T> {
    outcomes: Vec<BatchOutcome<T>>,
}

impl<T> BatchReport<T> {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, result: Result<T, CoreError>) {
        self.outcomes.push(BatchOutcome {
            label: label.into(),
            result,
        });
    }

    pub fn outcomes(&self) -> &[BatchOutcome<T>] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successfully processed items.
    pub fn succeeded(&self) -> impl Iterator<Item = (&str, &T)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|v| (o.label.as_str(), v)))
    }

    /// Failed items with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &CoreError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.label.as_str(), e)))
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failure_count() == 0
    }

    /// Consume the report, keeping only successful values.
    pub fn into_successes(self) -> Vec<T> {
        self.outcomes
            .into_iter()
            .filter_map(|o| o.result.ok())
            .collect()
    }
}

impl<T> FromIterator<(String, Result<T, CoreError>)> for BatchReport<T> {
    fn from_iter<I: IntoIterator<Item = (String, Result<T, CoreError>)>>(iter: I) -> Self {
        let mut report = Self::new();
        for (label, result) in iter {
            report.push(label, result);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> Result<i64, CoreError> {
        Err(CoreError::OperationFailed {
            message: msg.into(),
        })
    }

    #[test]
    fn partial_failure_keeps_both_sides() {
        let mut report = BatchReport::new();
        report.push("logo.png", Ok(101));
        report.push("banner.jpg", failed("scan failed"));
        report.push("flyer.pdf", Ok(103));

        assert_eq!(report.len(), 3);
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.is_complete_success());

        let ok: Vec<&str> = report.succeeded().map(|(label, _)| label).collect();
        assert_eq!(ok, vec!["logo.png", "flyer.pdf"]);

        let bad: Vec<&str> = report.failed().map(|(label, _)| label).collect();
        assert_eq!(bad, vec!["banner.jpg"]);
    }

    #[test]
    fn into_successes_preserves_order() {
        let mut report = BatchReport::new();
        report.push("a", Ok(1));
        report.push("b", failed("nope"));
        report.push("c", Ok(3));
        assert_eq!(report.into_successes(), vec![1, 3]);
    }

    #[test]
    fn empty_report_is_complete_success() {
        let report: BatchReport<i64> = BatchReport::new();
        assert!(report.is_empty());
        assert!(report.is_complete_success());
    }
}
