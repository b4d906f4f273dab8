//! Per-run outcome reporting.

use crate::api::ApiError;

/// Outcome of one resource kind's sweep.
///
/// `deleted` holds the identifiers of resources whose delete call succeeded
/// (or, in a dry run, would have been issued). A kind whose run was
/// abandoned carries the propagated failure; deletions made before the
/// failure are still listed.
#[derive(Debug)]
pub struct KindOutcome {
    pub kind: &'static str,
    pub deleted: Vec<String>,
    pub failure: Option<ApiError>,
}

/// Collected outcomes for a full run, in sweep order.
///
/// Nothing persists between runs; this exists for logs and the CLI summary.
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub outcomes: Vec<KindOutcome>,
}

impl SweepSummary {
    pub fn total_deleted(&self) -> usize {
        self.outcomes.iter().map(|o| o.deleted.len()).sum()
    }

    pub fn failed_kinds(&self) -> usize {
        self.outcomes.iter().filter(|o| o.failure.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let summary = SweepSummary {
            outcomes: vec![
                KindOutcome {
                    kind: "disks",
                    deleted: vec!["d-1".to_string(), "d-2".to_string()],
                    failure: None,
                },
                KindOutcome {
                    kind: "clusters",
                    deleted: vec![],
                    failure: Some(ApiError::Status {
                        status: 403,
                        message: "forbidden".to_string(),
                    }),
                },
            ],
        };

        assert_eq!(summary.total_deleted(), 2);
        assert_eq!(summary.failed_kinds(), 1);
    }
}
