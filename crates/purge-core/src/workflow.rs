use crate::batch::BatchCursor;
use crate::cancel::CancelSignal;
use crate::config::WorkflowOptions;
use crate::error::{ConfigError, ServiceError, VerifyError};
use crate::model::{Credentials, DeletionOutcome, RepositorySummary};
use crate::provider::RepoService;
use thiserror::Error;
use tracing::{debug, info, warn};

mod events;
mod verify;

pub use events::{ConfirmationGate, GateFuture, ProgressEvent, ProgressReporter};
pub use verify::{REQUIRED_SCOPES, missing_scopes, scope_purpose, verify_identity, verify_scopes};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkflowState {
    Idle,
    VerifyingIdentity,
    VerifyingScopes,
    Enumerating,
    BatchPresenting,
    BatchProcessing,
    BatchSkipping,
    Completed,
    Aborted,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::VerifyingIdentity => "verifying_identity",
            WorkflowState::VerifyingScopes => "verifying_scopes",
            WorkflowState::Enumerating => "enumerating",
            WorkflowState::BatchPresenting => "batch_presenting",
            WorkflowState::BatchProcessing => "batch_processing",
            WorkflowState::BatchSkipping => "batch_skipping",
            WorkflowState::Completed => "completed",
            WorkflowState::Aborted => "aborted",
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AbortReason {
    #[error(transparent)]
    Verification(#[from] VerifyError),
    #[error("repository enumeration failed: {0}")]
    Enumeration(ServiceError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("operation interrupted by user")]
    Interrupted,
    #[error("confirmation failed: {0}")]
    Gate(String),
}

/// Result of one run. Already-deleted repositories stay deleted when the run
/// aborts; `cursor` then points at the start of the batch that was in
/// progress.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub state: WorkflowState,
    pub abort: Option<AbortReason>,
    pub cursor: Option<BatchCursor>,
    pub total: usize,
    pub deleted: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunReport {
    fn new() -> Self {
        Self {
            state: WorkflowState::Idle,
            abort: None,
            cursor: None,
            total: 0,
            deleted: 0,
            failed: 0,
            skipped: 0,
        }
    }

    fn record(&mut self, outcome: &DeletionOutcome) {
        match outcome {
            DeletionOutcome::Deleted => self.deleted += 1,
            DeletionOutcome::Failed(_) => self.failed += 1,
            DeletionOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Items that received a deletion attempt.
    pub fn processed(&self) -> usize {
        self.deleted + self.failed
    }

    /// Items the run never reached.
    pub fn not_reached(&self) -> usize {
        self.total
            .saturating_sub(self.processed())
            .saturating_sub(self.skipped)
    }

    pub fn is_completed(&self) -> bool {
        self.state == WorkflowState::Completed
    }
}

/// Verified, batched deletion of every public repository of one owner.
///
/// Strictly sequential: one network call at a time, items in enumeration
/// order, a single suspension point at the confirmation gate.
pub struct DeletionWorkflow<'a> {
    service: &'a dyn RepoService,
    gate: &'a dyn ConfirmationGate,
    reporter: &'a dyn ProgressReporter,
    credentials: &'a Credentials,
    options: WorkflowOptions,
    cancel: CancelSignal,
    state: WorkflowState,
}

impl<'a> DeletionWorkflow<'a> {
    pub fn new(
        service: &'a dyn RepoService,
        gate: &'a dyn ConfirmationGate,
        reporter: &'a dyn ProgressReporter,
        credentials: &'a Credentials,
        options: WorkflowOptions,
        cancel: CancelSignal,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            service,
            gate,
            reporter,
            credentials,
            options,
            cancel,
            state: WorkflowState::Idle,
        })
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub async fn run(&mut self) -> RunReport {
        let mut report = RunReport::new();
        match self.drive(&mut report).await {
            Ok(()) => {
                self.transition(WorkflowState::Completed);
                info!(
                    deleted = report.deleted,
                    failed = report.failed,
                    skipped = report.skipped,
                    "run completed"
                );
            }
            Err(reason) => {
                warn!(reason = %reason, deleted = report.deleted, "run aborted");
                self.transition(WorkflowState::Aborted);
                report.abort = Some(reason);
            }
        }
        report.state = self.state;
        report
    }

    async fn drive(&mut self, report: &mut RunReport) -> Result<(), AbortReason> {
        self.ensure_not_cancelled()?;
        self.transition(WorkflowState::VerifyingIdentity);
        verify_identity(self.service, self.credentials).await?;

        self.ensure_not_cancelled()?;
        self.transition(WorkflowState::VerifyingScopes);
        verify_scopes(self.service, &REQUIRED_SCOPES).await?;

        self.ensure_not_cancelled()?;
        self.transition(WorkflowState::Enumerating);
        let repos = self.enumerate().await?;
        report.total = repos.len();
        self.reporter
            .report(&ProgressEvent::RepositoriesFound { total: repos.len() });

        let mut cursor = BatchCursor::new(self.options.batch_size, repos.len())?;
        report.cursor = Some(cursor);
        while !cursor.is_finished() {
            self.ensure_not_cancelled()?;
            self.transition(WorkflowState::BatchPresenting);
            let batch = cursor.current(&repos);
            self.reporter.report(&ProgressEvent::BatchPresented {
                batch_number: cursor.batch_number(),
                batch_count: cursor.batch_count(),
                start_index: cursor.start_index(),
                repos: batch,
            });
            let approved = self
                .gate
                .confirm(batch, cursor)
                .await
                .map_err(|err| AbortReason::Gate(format!("{err:#}")))?;
            self.ensure_not_cancelled()?;

            if approved {
                self.transition(WorkflowState::BatchProcessing);
                self.process_batch(batch, cursor, report).await?;
            } else {
                self.transition(WorkflowState::BatchSkipping);
                self.skip_batch(batch, cursor, report);
            }
            cursor.advance();
            report.cursor = Some(cursor);
        }
        Ok(())
    }

    async fn enumerate(&self) -> Result<Vec<RepositorySummary>, AbortReason> {
        let listed = self
            .service
            .list_public_repos(self.credentials.owner())
            .await
            .map_err(AbortReason::Enumeration)?;
        let listed_len = listed.len();
        let repos: Vec<RepositorySummary> =
            listed.into_iter().filter(|repo| !repo.private).collect();
        if repos.len() != listed_len {
            warn!(
                dropped = listed_len - repos.len(),
                "private repositories returned by enumeration were ignored"
            );
        }
        info!(count = repos.len(), "public repositories enumerated");
        Ok(repos)
    }

    async fn process_batch(
        &self,
        batch: &[RepositorySummary],
        cursor: BatchCursor,
        report: &mut RunReport,
    ) -> Result<(), AbortReason> {
        let owner = self.credentials.owner();
        let total = cursor.total();
        for (offset, repo) in batch.iter().enumerate() {
            self.ensure_not_cancelled()?;
            let index = cursor.start_index() + offset;
            self.reporter
                .report(&ProgressEvent::ItemStarted { index, total, repo });

            if let Some(detail) = self.service.fetch_detail(owner, &repo.name).await {
                self.reporter.report(&ProgressEvent::DetailFetched {
                    index,
                    detail: &detail,
                });
            }

            let outcome = match self.service.delete_repo(owner, &repo.name).await {
                Ok(()) => {
                    info!(repo = %repo.full_name, "repository deleted");
                    DeletionOutcome::Deleted
                }
                Err(err) => {
                    warn!(repo = %repo.full_name, error = %err, "repository deletion failed");
                    DeletionOutcome::Failed(err)
                }
            };
            report.record(&outcome);
            self.reporter.report(&ProgressEvent::ItemFinished {
                index,
                total,
                repo,
                outcome: &outcome,
            });
            self.pace().await?;
        }
        Ok(())
    }

    fn skip_batch(&self, batch: &[RepositorySummary], cursor: BatchCursor, report: &mut RunReport) {
        let outcome = DeletionOutcome::Skipped;
        for (offset, repo) in batch.iter().enumerate() {
            report.record(&outcome);
            self.reporter.report(&ProgressEvent::ItemFinished {
                index: cursor.start_index() + offset,
                total: cursor.total(),
                repo,
                outcome: &outcome,
            });
        }
        debug!(count = batch.len(), "batch skipped");
    }

    /// Fixed spacing after every deletion attempt, cut short only by an
    /// interruption.
    async fn pace(&self) -> Result<(), AbortReason> {
        tokio::select! {
            _ = self.cancel.cancelled() => Err(AbortReason::Interrupted),
            _ = tokio::time::sleep(self.options.item_delay) => Ok(()),
        }
    }

    fn ensure_not_cancelled(&self) -> Result<(), AbortReason> {
        if self.cancel.is_cancelled() {
            return Err(AbortReason::Interrupted);
        }
        Ok(())
    }

    fn transition(&mut self, next: WorkflowState) {
        debug!(from = self.state.as_str(), to = next.as_str(), "workflow transition");
        self.state = next;
        self.reporter.report(&ProgressEvent::StateChanged(next));
    }
}
