use super::WorkflowState;
use crate::batch::BatchCursor;
use crate::model::{DeletionOutcome, RepositoryDetail, RepositorySummary};
use std::future::Future;
use std::pin::Pin;

pub type GateFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<bool>> + 'a>>;

/// Human decision point, asked once per batch. `Ok(true)` deletes the batch,
/// `Ok(false)` skips it, an error aborts the run.
pub trait ConfirmationGate {
    fn confirm<'a>(
        &'a self,
        batch: &'a [RepositorySummary],
        cursor: BatchCursor,
    ) -> GateFuture<'a>;
}

pub trait ProgressReporter {
    fn report(&self, event: &ProgressEvent<'_>);
}

#[derive(Clone, Debug)]
pub enum ProgressEvent<'a> {
    StateChanged(WorkflowState),
    RepositoriesFound {
        total: usize,
    },
    BatchPresented {
        batch_number: usize,
        batch_count: usize,
        start_index: usize,
        repos: &'a [RepositorySummary],
    },
    ItemStarted {
        index: usize,
        total: usize,
        repo: &'a RepositorySummary,
    },
    DetailFetched {
        index: usize,
        detail: &'a RepositoryDetail,
    },
    ItemFinished {
        index: usize,
        total: usize,
        repo: &'a RepositorySummary,
        outcome: &'a DeletionOutcome,
    },
}

impl ProgressEvent<'_> {
    /// Completion percentage after an item finished.
    pub fn percent(&self) -> Option<f64> {
        match self {
            ProgressEvent::ItemFinished { index, total, .. } if *total > 0 => {
                Some((*index + 1) as f64 / *total as f64 * 100.0)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_counts_finished_item() {
        let repo = RepositorySummary {
            name: "a".into(),
            full_name: "me/a".into(),
            private: false,
        };
        let outcome = DeletionOutcome::Deleted;
        let event = ProgressEvent::ItemFinished {
            index: 1,
            total: 8,
            repo: &repo,
            outcome: &outcome,
        };
        assert_eq!(event.percent(), Some(25.0));
        assert_eq!(ProgressEvent::RepositoriesFound { total: 3 }.percent(), None);
    }
}
