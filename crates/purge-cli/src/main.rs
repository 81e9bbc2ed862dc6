use std::process::ExitCode;

mod cli;
mod logging;

fn main() -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(cli::run());
    // A confirmation prompt abandoned on interrupt may still be parked on stdin.
    runtime.shutdown_background();
    result
}
