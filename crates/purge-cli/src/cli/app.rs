use super::shared::{
    TerminalGate, TerminalReporter, print_run_report, prompt_token, spawn_interrupt_listener,
};
use super::*;

pub(super) async fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let options = WorkflowOptions {
        batch_size: cli.batch_size,
        item_delay: Duration::from_millis(cli.delay_ms),
    };
    options.validate()?;

    let token = match cli.token {
        Some(token) => token,
        None => prompt_token(&cli.owner)?,
    };
    let credentials = Credentials::new(cli.owner, token)?;
    let service = GitHubService::new(
        ClientConfig::with_base_url(Some(&cli.api_url)),
        credentials.clone(),
    )?;
    let audit = cli
        .audit_log
        .as_deref()
        .map(AuditLogger::open)
        .transpose()
        .context("prepare audit log")?;

    let cancel = CancelSignal::new();
    spawn_interrupt_listener(cancel.clone());
    let gate = TerminalGate::new(cancel.clone());
    let reporter = TerminalReporter::new(audit.clone());

    info!(
        owner = credentials.owner(),
        batch_size = options.batch_size,
        delay_ms = options.item_delay.as_millis() as u64,
        "starting run"
    );
    let mut workflow =
        DeletionWorkflow::new(&service, &gate, &reporter, &credentials, options, cancel)?;
    let report = workflow.run().await;

    if let Some(audit) = &audit
        && let Err(err) = audit.record_run(&report)
    {
        warn!(error = %err, "failed to write audit record");
    }
    print_run_report(&report);
    Ok(ExitCode::from(exit_status(&report)))
}

pub(super) fn exit_status(report: &RunReport) -> u8 {
    match &report.abort {
        None => 0,
        Some(AbortReason::Interrupted) => 130,
        Some(_) => 1,
    }
}
