use super::*;

pub(in crate::cli) const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/tokens";

/// Actionable follow-up for a failed credential check.
pub(in crate::cli) fn verify_guidance(err: &VerifyError) -> Vec<String> {
    match err {
        VerifyError::IdentityMismatch { expected, actual } => vec![
            format!("The token authenticates as {actual}, not {expected}."),
            format!(
                "Nothing was listed or deleted. Use a token issued to {expected} so the run cannot act on another account."
            ),
        ],
        VerifyError::InvalidToken => {
            vec!["Make sure the token is valid and has not expired.".to_string()]
        }
        VerifyError::MissingScopes { missing } => {
            let mut lines = vec![format!(
                "Grant the token the following scopes at {TOKEN_SETTINGS_URL}:"
            )];
            for scope in missing {
                match scope_purpose(scope) {
                    Some(purpose) => lines.push(format!("  - {scope} (to {purpose})")),
                    None => lines.push(format!("  - {scope}")),
                }
            }
            lines
        }
        VerifyError::ScopesUnavailable => vec![format!(
            "Fine-grained tokens do not report scopes. Create a classic token with {} at {TOKEN_SETTINGS_URL}.",
            REQUIRED_SCOPES.join(" and ")
        )],
        VerifyError::Identity(_) | VerifyError::Scopes(_) => vec![
            "Check network connectivity and the --api-url value, then retry.".to_string(),
        ],
    }
}

pub(in crate::cli) fn summary_line(report: &RunReport) -> String {
    format!(
        "Summary: {} deleted, {} failed, {} skipped, {} not reached (of {} public repositories)",
        report.deleted,
        report.failed,
        report.skipped,
        report.not_reached(),
        report.total
    )
}

pub(in crate::cli) fn print_run_report(report: &RunReport) {
    match &report.abort {
        None => {
            if report.total > 0 {
                println!("\n{}", summary_line(report));
            }
            println!("\n{}", "✨ Done.".green());
        }
        Some(AbortReason::Interrupted) => {
            println!("\n{}", "Operation interrupted by user.".yellow());
            if report.cursor.is_some() {
                println!("{}", summary_line(report));
            }
        }
        Some(reason) => {
            eprintln!("{}", format!("✗ Aborted: {reason}").red());
            if let AbortReason::Verification(err) = reason {
                for line in verify_guidance(err) {
                    eprintln!("{}", line.yellow());
                }
            }
            if report.cursor.is_some() {
                println!("{}", summary_line(report));
            }
        }
    }
}
