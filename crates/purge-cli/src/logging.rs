use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["purge_core", "purge_providers", "repo_purge"];

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Directive raising our own crates to `level` while dependencies stay at
/// `warn`.
pub fn directive_for(level: LogLevel) -> String {
    let mut directive = String::from("warn");
    for name in CRATES {
        directive.push_str(&format!(",{name}={}", level.as_str()));
    }
    directive
}

pub fn filter_for(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(directive_for(level)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Logs go to stderr so the progress stream on stdout stays readable.
pub fn init(level: Option<LogLevel>) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_scopes_level_to_own_crates() {
        let directive = directive_for(LogLevel::Debug);
        assert!(directive.starts_with("warn,"));
        assert!(directive.contains("purge_core=debug"));
        assert!(directive.contains("purge_providers=debug"));
        assert!(directive.contains("repo_purge=debug"));
        assert!(!directive.contains("reqwest"));
    }
}
