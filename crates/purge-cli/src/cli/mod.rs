use crate::logging::{self, LogLevel};
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use purge_core::audit::AuditLogger;
use purge_core::batch::BatchCursor;
use purge_core::cancel::CancelSignal;
use purge_core::config::{DEFAULT_BATCH_SIZE, DEFAULT_ITEM_DELAY, MIN_ITEM_DELAY, WorkflowOptions};
use purge_core::error::{DeletionError, VerifyError};
use purge_core::model::{Credentials, DeletionOutcome, RepositoryDetail, RepositorySummary};
use purge_core::workflow::{
    AbortReason, ConfirmationGate, DeletionWorkflow, GateFuture, ProgressEvent, ProgressReporter,
    REQUIRED_SCOPES, RunReport, WorkflowState, scope_purpose,
};
use purge_providers::{ClientConfig, DEFAULT_API_URL, GitHubService};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{info, warn};

mod app;
mod args;
mod shared;

use args::*;

pub async fn run() -> anyhow::Result<ExitCode> {
    app::run().await
}
