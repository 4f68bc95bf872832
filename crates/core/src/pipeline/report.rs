//! Run progress and summary reporting.

use std::time::Instant;
use tracing::{info, warn};

use super::types::{ItemOutcome, RunSummary};

/// Observes item outcomes in arrival order and produces the final tally.
///
/// Output is human-facing only; nothing downstream consumes the summary.
pub struct RunReporter {
    total: usize,
    successful: usize,
    failed: usize,
    index: usize,
    started: Instant,
}

impl RunReporter {
    /// Starts reporting for a run of `total` items.
    pub fn new(total: usize) -> Self {
        info!("Starting run with {} items", total);
        Self {
            total,
            successful: 0,
            failed: 0,
            index: 0,
            started: Instant::now(),
        }
    }

    /// Records one item's outcome and logs its status line.
    pub fn observe(&mut self, label: &str, outcome: &ItemOutcome) {
        self.index += 1;
        match outcome {
            ItemOutcome::Written { path } => {
                self.successful += 1;
                info!(
                    "[{}/{}] {} -> {}",
                    self.index,
                    self.total,
                    label,
                    path.display()
                );
            }
            ItemOutcome::Failed { reason } => {
                self.failed += 1;
                warn!("[{}/{}] {} failed: {}", self.index, self.total, label, reason);
            }
        }
    }

    /// Logs the final tally and returns the summary.
    pub fn finish(self) -> RunSummary {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        info!(
            "Run complete: {} successful, {} failed of {} in {}ms",
            self.successful, self.failed, self.total, duration_ms
        );
        RunSummary {
            total: self.total,
            successful: self.successful,
            failed: self.failed,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::FailureReason;
    use std::path::PathBuf;

    #[test]
    fn test_reporter_counts_add_up() {
        let mut reporter = RunReporter::new(3);
        reporter.observe(
            "a.pdf",
            &ItemOutcome::Written {
                path: PathBuf::from("out/a.txt"),
            },
        );
        reporter.observe(
            "b.pdf",
            &ItemOutcome::Failed {
                reason: FailureReason::SourceUnreadable,
            },
        );
        reporter.observe(
            "c.pdf",
            &ItemOutcome::Written {
                path: PathBuf::from("out/c.txt"),
            },
        );

        let summary = reporter.finish();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.successful + summary.failed, summary.total);
    }

    #[test]
    fn test_reporter_empty_run() {
        let reporter = RunReporter::new(0);
        let summary = reporter.finish();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.successful, 0);
        assert_eq!(summary.failed, 0);
    }
}
