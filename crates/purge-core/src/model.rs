use crate::error::{ConfigError, DeletionError};
use std::fmt;

/// Identity of one repository as returned by enumeration.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub private: bool,
}

/// Display-only enrichment fetched right before a repository is deleted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RepositoryDetail {
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub fork: bool,
    pub license: Option<String>,
}

/// Token plus the account the operator claims it belongs to.
#[derive(Clone)]
pub struct Credentials {
    owner: String,
    token: String,
}

impl Credentials {
    pub fn new(owner: impl Into<String>, token: impl Into<String>) -> Result<Self, ConfigError> {
        let owner = owner.into().trim().to_string();
        let token = token.into().trim().to_string();
        if owner.is_empty() {
            return Err(ConfigError::EmptyOwner);
        }
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self { owner, token })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("owner", &self.owner)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeletionOutcome {
    Deleted,
    Failed(DeletionError),
    Skipped,
}

impl DeletionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionOutcome::Deleted => "deleted",
            DeletionOutcome::Failed(_) => "failed",
            DeletionOutcome::Skipped => "skipped",
        }
    }
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionOutcome::Failed(err) => write!(f, "failed: {err}"),
            other => f.write_str(other.as_str()),
        }
    }
}
