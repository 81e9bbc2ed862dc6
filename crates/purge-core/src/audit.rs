use crate::model::{DeletionOutcome, RepositorySummary};
use crate::workflow::RunReport;
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuditStatus {
    Ok,
    Failed,
    Skipped,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Ok => "ok",
            AuditStatus::Failed => "failed",
            AuditStatus::Skipped => "skipped",
        }
    }
}

#[derive(Serialize)]
struct AuditEvent<'a> {
    ts: String,
    session_id: &'a str,
    event: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Append-only JSON-lines trail of what a run did to each repository.
#[derive(Clone, Debug)]
pub struct AuditLogger {
    session_id: String,
    path: PathBuf,
}

impl AuditLogger {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("create audit log directory")?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open audit log {}", path.display()))?;
        Ok(Self {
            session_id: Uuid::new_v4().to_string(),
            path: path.to_path_buf(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn record(
        &self,
        event: &str,
        status: AuditStatus,
        repo: Option<&str>,
        details: Option<Value>,
        error: Option<&str>,
    ) -> anyhow::Result<()> {
        let ts = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format timestamp")?;
        let entry = AuditEvent {
            ts,
            session_id: &self.session_id,
            event,
            status: status.as_str(),
            repo,
            error: error.map(ToString::to_string),
            details,
        };
        let mut line = serde_json::to_string(&entry).context("serialize audit event")?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .context("open audit log")?;
        file.write_all(line.as_bytes())
            .context("write audit event")?;
        Ok(())
    }

    pub fn record_outcome(
        &self,
        repo: &RepositorySummary,
        outcome: &DeletionOutcome,
    ) -> anyhow::Result<()> {
        match outcome {
            DeletionOutcome::Deleted => self.record(
                "repo.deleted",
                AuditStatus::Ok,
                Some(&repo.full_name),
                None,
                None,
            ),
            DeletionOutcome::Failed(err) => self.record(
                "repo.failed",
                AuditStatus::Failed,
                Some(&repo.full_name),
                None,
                Some(&err.to_string()),
            ),
            DeletionOutcome::Skipped => self.record(
                "repo.skipped",
                AuditStatus::Skipped,
                Some(&repo.full_name),
                None,
                None,
            ),
        }
    }

    pub fn record_run(&self, report: &RunReport) -> anyhow::Result<()> {
        let status = if report.is_completed() {
            AuditStatus::Ok
        } else {
            AuditStatus::Failed
        };
        let details = serde_json::json!({
            "state": report.state.as_str(),
            "total": report.total,
            "deleted": report.deleted,
            "failed": report.failed,
            "skipped": report.skipped,
            "not_reached": report.not_reached(),
        });
        let error = report.abort.as_ref().map(ToString::to_string);
        self.record("run.end", status, None, Some(details), error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeletionError;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<Value> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn outcomes_are_appended_as_json_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logs").join("audit.jsonl");
        let audit = AuditLogger::open(&path).unwrap();
        let repo = RepositorySummary {
            name: "old".into(),
            full_name: "me/old".into(),
            private: false,
        };

        audit.record_outcome(&repo, &DeletionOutcome::Deleted).unwrap();
        audit
            .record_outcome(&repo, &DeletionOutcome::Failed(DeletionError::Forbidden))
            .unwrap();
        audit.record_outcome(&repo, &DeletionOutcome::Skipped).unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["event"], "repo.deleted");
        assert_eq!(lines[0]["repo"], "me/old");
        assert!(lines[0].get("error").is_none());
        assert_eq!(lines[1]["status"], "failed");
        assert!(lines[1]["error"].as_str().unwrap().contains("403"));
        assert_eq!(lines[2]["status"], "skipped");
        assert!(
            lines
                .iter()
                .all(|line| line["session_id"] == audit.session_id())
        );
    }

    #[test]
    fn reopening_keeps_previous_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audit.jsonl");
        AuditLogger::open(&path)
            .unwrap()
            .record("run.start", AuditStatus::Ok, None, None, None)
            .unwrap();
        AuditLogger::open(&path)
            .unwrap()
            .record("run.start", AuditStatus::Ok, None, None, None)
            .unwrap();
        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_ne!(lines[0]["session_id"], lines[1]["session_id"]);
    }
}
