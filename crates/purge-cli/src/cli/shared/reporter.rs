use super::*;

/// Prints every workflow event and mirrors outcomes into the audit trail.
pub(in crate::cli) struct TerminalReporter {
    audit: Option<AuditLogger>,
}

impl TerminalReporter {
    pub(in crate::cli) fn new(audit: Option<AuditLogger>) -> Self {
        Self { audit }
    }
}

pub(in crate::cli) fn state_message(state: WorkflowState) -> Option<&'static str> {
    match state {
        WorkflowState::VerifyingIdentity => Some("Verifying token..."),
        WorkflowState::VerifyingScopes => Some("Verifying permissions..."),
        WorkflowState::Enumerating => Some("Fetching repository list..."),
        _ => None,
    }
}

impl ProgressReporter for TerminalReporter {
    fn report(&self, event: &ProgressEvent<'_>) {
        match event {
            ProgressEvent::StateChanged(state) => {
                if let Some(message) = state_message(*state) {
                    println!("{}", message.yellow());
                }
            }
            ProgressEvent::RepositoriesFound { total: 0 } => {
                println!("{}", "No public repositories found.".green());
            }
            ProgressEvent::RepositoriesFound { total } => {
                println!("\n{}", format!("Found {total} public repositories").yellow());
            }
            ProgressEvent::BatchPresented { .. } => {}
            ProgressEvent::ItemStarted { index, total, repo } => {
                println!(
                    "\n{}",
                    format!(
                        "Processing repository {}/{}: {}",
                        index + 1,
                        total,
                        repo.full_name
                    )
                    .cyan()
                );
            }
            ProgressEvent::DetailFetched { detail, .. } => print_detail(detail),
            ProgressEvent::ItemFinished {
                index,
                total,
                repo,
                outcome,
            } => {
                print_outcome(repo, outcome);
                let percent = event.percent().unwrap_or(100.0);
                println!("{}", render_progress_line(index + 1, *total, percent).blue());
                if matches!(outcome, DeletionOutcome::Deleted | DeletionOutcome::Failed(_)) {
                    println!("{}", rule());
                }
                if let Some(audit) = &self.audit
                    && let Err(err) = audit.record_outcome(repo, outcome)
                {
                    warn!(error = %err, repo = %repo.full_name, "failed to write audit record");
                }
            }
        }
    }
}
