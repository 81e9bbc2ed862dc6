use super::*;
use dialoguer::{Confirm, Password};
use std::io::ErrorKind;

pub(in crate::cli) fn prompt_token(owner: &str) -> anyhow::Result<String> {
    Password::new()
        .with_prompt(format!("GitHub personal access token for {owner}"))
        .interact()
        .context("read token")
}

/// Interrupts become a cancelled run instead of killing the process.
pub(in crate::cli) fn spawn_interrupt_listener(cancel: CancelSignal) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping before the next repository");
            cancel.cancel();
        }
    });
}

/// Asks the operator on the terminal, once per batch.
pub(in crate::cli) struct TerminalGate {
    cancel: CancelSignal,
}

impl TerminalGate {
    pub(in crate::cli) fn new(cancel: CancelSignal) -> Self {
        Self { cancel }
    }
}

impl ConfirmationGate for TerminalGate {
    fn confirm<'a>(
        &'a self,
        batch: &'a [RepositorySummary],
        cursor: BatchCursor,
    ) -> GateFuture<'a> {
        Box::pin(async move {
            print_batch_preview(batch, cursor);
            let prompt = tokio::task::spawn_blocking(|| {
                Confirm::new()
                    .with_prompt("Delete this batch of repositories?")
                    .default(false)
                    .interact()
            });
            tokio::select! {
                answer = prompt => match answer.context("join confirmation prompt")? {
                    Ok(approved) => Ok(approved),
                    Err(err) if is_interrupted(&err) => {
                        self.cancel.cancel();
                        Ok(false)
                    }
                    Err(err) => Err(anyhow::Error::new(err).context("read confirmation")),
                },
                _ = self.cancel.cancelled() => Ok(false),
            }
        })
    }
}

// Ctrl-C inside the raw-mode prompt arrives as a key, not a signal.
fn is_interrupted(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted)
}
