use super::*;

const RULE_WIDTH: usize = 50;

pub(in crate::cli) fn render_progress_bar(step: usize, total: usize, width: usize) -> String {
    if total == 0 || width == 0 {
        return "[]".to_string();
    }
    let filled = ((step as f32 / total as f32) * width as f32).round() as usize;
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(empty))
}

pub(in crate::cli) fn render_progress_line(done: usize, total: usize, percent: f64) -> String {
    format!(
        "Progress: {percent:.1}% ({done}/{total}) {}",
        render_progress_bar(done, total, 20)
    )
}

pub(in crate::cli) fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub(in crate::cli) fn detail_lines(detail: &RepositoryDetail) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Name", detail.full_name.clone()),
        ("URL", detail.html_url.clone()),
        (
            "Description",
            detail
                .description
                .clone()
                .unwrap_or_else(|| "none".to_string()),
        ),
        ("Created", detail.created_at.clone()),
        ("Last updated", detail.updated_at.clone()),
        ("Stars", detail.stars.to_string()),
        ("Forks", detail.forks.to_string()),
        (
            "Language",
            detail
                .language
                .clone()
                .unwrap_or_else(|| "unspecified".to_string()),
        ),
        ("Fork", if detail.fork { "yes" } else { "no" }.to_string()),
    ];
    if let Some(license) = &detail.license {
        lines.push(("License", license.clone()));
    }
    lines
}

pub(in crate::cli) fn print_detail(detail: &RepositoryDetail) {
    println!("{}", "Repository details:".yellow());
    for (label, value) in detail_lines(detail) {
        println!("{} {value}", format!("{label}:").cyan());
    }
}

pub(in crate::cli) fn print_batch_preview(batch: &[RepositorySummary], cursor: BatchCursor) {
    println!(
        "\n{}",
        format!(
            "The following repositories will be deleted (batch {} of {}):",
            cursor.batch_number(),
            cursor.batch_count()
        )
        .bold()
        .yellow()
    );
    println!("{}", rule());
    for (position, repo) in batch.iter().enumerate() {
        println!("{} {}", format!("{}.", position + 1).cyan(), repo.full_name);
    }
    println!("{}", rule());
    println!("Answer 'y' to delete these repositories or 'n' to skip them.");
}

pub(in crate::cli) fn outcome_line(repo: &RepositorySummary, outcome: &DeletionOutcome) -> String {
    match outcome {
        DeletionOutcome::Deleted => format!("✓ Deleted repository: {}", repo.full_name),
        DeletionOutcome::Failed(err) => {
            format!("✗ Failed to delete repository {}: {err}", repo.full_name)
        }
        DeletionOutcome::Skipped => format!("→ Skipped repository: {}", repo.full_name),
    }
}

pub(in crate::cli) fn print_outcome(repo: &RepositorySummary, outcome: &DeletionOutcome) {
    let line = outcome_line(repo, outcome);
    match outcome {
        DeletionOutcome::Deleted => println!("{}", line.green()),
        DeletionOutcome::Failed(err) => {
            println!("{}", line.red());
            print_deletion_hints(err);
        }
        DeletionOutcome::Skipped => println!("{}", line.yellow()),
    }
}

fn print_deletion_hints(err: &DeletionError) {
    let hints = err.hints();
    if hints.is_empty() {
        return;
    }
    println!("{}", "Possible causes:".yellow());
    for (position, hint) in hints.iter().enumerate() {
        println!("  {}. {hint}", position + 1);
    }
}
