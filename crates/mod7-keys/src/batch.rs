//! Batch validation.

use crate::validate::validate;
use mod7_core::{Error, Result, ValidationReport};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::info;

/// Result of validating a batch of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// One report per key, in input order.
    pub reports: Vec<ValidationReport>,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    fn from_reports(reports: Vec<ValidationReport>) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid()).count();
        let invalid = reports.len() - valid;
        Self {
            reports,
            valid,
            invalid,
        }
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }
}

/// Candidate keys from a key file: one per line, surrounding whitespace
/// trimmed, blank lines skipped.
pub fn key_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate every key on its own task and join before totalling.
///
/// Reports come back in input order regardless of task completion order.
pub async fn validate_batch<I>(keys: I) -> Result<BatchSummary>
where
    I: IntoIterator<Item = String>,
{
    let mut tasks = JoinSet::new();
    let mut count = 0;
    for (index, key) in keys.into_iter().enumerate() {
        tasks.spawn(async move { (index, validate(&key)) });
        count += 1;
    }

    let mut slots: Vec<Option<ValidationReport>> = vec![None; count];
    while let Some(joined) = tasks.join_next().await {
        let (index, report) =
            joined.map_err(|e| Error::Internal(format!("Validation task failed: {}", e)))?;
        slots[index] = Some(report);
    }

    let reports = slots.into_iter().flatten().collect();
    let summary = BatchSummary::from_reports(reports);

    info!(
        total = summary.total(),
        valid = summary.valid,
        invalid = summary.invalid,
        "Batch validation complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mod7_core::KeyShape;

    #[test]
    fn test_key_lines_skips_blanks() {
        let content = "111-1111111\n\n  \n123-4560007\r\nhello\n";
        assert_eq!(
            key_lines(content),
            vec!["111-1111111", "123-4560007", "hello"]
        );
    }

    #[test]
    fn test_key_lines_empty() {
        assert!(key_lines("").is_empty());
        assert!(key_lines("\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_validate_batch_counts() {
        let keys = key_lines("111-1111111\n123-4560007\n\nhello\n36603-OEM-0000007-99999\n");
        let summary = validate_batch(keys).await.unwrap();

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.valid, 2);
        assert_eq!(summary.invalid, 2);
    }

    #[tokio::test]
    async fn test_validate_batch_preserves_order() {
        let keys: Vec<String> = (0..200)
            .map(|i| {
                if i % 2 == 0 {
                    "111-1111111".to_string()
                } else {
                    format!("bad-{}", i)
                }
            })
            .collect();
        let summary = validate_batch(keys.clone()).await.unwrap();

        let order: Vec<&str> = summary.reports.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(order, keys.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(summary.reports[0].shape, KeyShape::TenDigit);
        assert_eq!(summary.valid, 100);
    }

    #[tokio::test]
    async fn test_validate_empty_batch() {
        let summary = validate_batch(Vec::new()).await.unwrap();
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.valid, 0);
    }
}
