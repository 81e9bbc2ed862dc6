use super::*;

#[derive(Parser)]
#[command(
    name = "repo-purge",
    author,
    version,
    about = "Delete every public repository of a GitHub account, one confirmed batch at a time"
)]
pub(super) struct Cli {
    #[arg(help = "GitHub account whose public repositories will be deleted")]
    pub(super) owner: String,
    #[arg(
        long,
        help = "Personal access token with the repo and delete_repo scopes (prompted when omitted)"
    )]
    pub(super) token: Option<String>,
    #[arg(
        long,
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = parse_batch_size,
        help = "Number of repositories confirmed per batch"
    )]
    pub(super) batch_size: usize,
    #[arg(
        long,
        default_value_t = DEFAULT_ITEM_DELAY.as_millis() as u64,
        value_parser = parse_delay_ms,
        help = "Pause after each deletion attempt, in milliseconds (at least 1000)"
    )]
    pub(super) delay_ms: u64,
    #[arg(long, default_value = DEFAULT_API_URL, help = "Base URL of the REST API")]
    pub(super) api_url: String,
    #[arg(long, help = "Append a JSON-lines record of every outcome to this file")]
    pub(super) audit_log: Option<PathBuf>,
    #[arg(long, value_enum, help = "Log verbosity on stderr (defaults to RUST_LOG, then warn)")]
    pub(super) log_level: Option<LogLevel>,
}

pub(super) fn parse_batch_size(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err("batch size must be a positive integer".to_string()),
        Ok(size) => Ok(size),
    }
}

pub(super) fn parse_delay_ms(value: &str) -> Result<u64, String> {
    let min = MIN_ITEM_DELAY.as_millis() as u64;
    match value.trim().parse::<u64>() {
        Ok(ms) if ms >= min => Ok(ms),
        _ => Err(format!("delay must be a whole number of milliseconds, at least {min}")),
    }
}
