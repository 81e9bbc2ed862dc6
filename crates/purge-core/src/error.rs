use thiserror::Error;

/// Failure talking to the hosting service.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ServiceError {
    #[error("authentication failed (HTTP 401)")]
    Unauthorized,
    #[error("access forbidden (HTTP 403)")]
    Forbidden,
    #[error("resource not found (HTTP 404)")]
    NotFound,
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn from_status(code: u16) -> Self {
        match code {
            401 => ServiceError::Unauthorized,
            403 => ServiceError::Forbidden,
            404 => ServiceError::NotFound,
            other => ServiceError::Status(other),
        }
    }
}

/// Per-repository deletion failure. Never retried by the workflow.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DeletionError {
    #[error("not permitted to delete the repository (403 Forbidden)")]
    Forbidden,
    #[error("repository does not exist or is not accessible (404 Not Found)")]
    NotFound,
    #[error("{0}")]
    Transient(String),
}

impl DeletionError {
    /// Likely causes shown to the operator next to the failure.
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            DeletionError::Forbidden => &[
                "the token lacks the delete_repo scope",
                "the repository may have branch protection enabled",
                "an organization policy may restrict repository deletion",
            ],
            DeletionError::NotFound => &["the repository may already have been deleted"],
            DeletionError::Transient(_) => &[],
        }
    }
}

impl From<ServiceError> for DeletionError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unauthorized | ServiceError::Forbidden => DeletionError::Forbidden,
            ServiceError::NotFound => DeletionError::NotFound,
            other => DeletionError::Transient(other.to_string()),
        }
    }
}

/// Credential or permission check that failed before anything was listed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum VerifyError {
    #[error("token belongs to {actual}, not to the target account {expected}")]
    IdentityMismatch { expected: String, actual: String },
    #[error("token was rejected by the service")]
    InvalidToken,
    #[error("token verification failed: {0}")]
    Identity(ServiceError),
    #[error("token is missing required scopes: {}", .missing.join(", "))]
    MissingScopes { missing: Vec<String> },
    #[error("token scopes could not be determined from the service response")]
    ScopesUnavailable,
    #[error("permission verification failed: {0}")]
    Scopes(ServiceError),
}

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("batch size must be a positive integer")]
    InvalidBatchSize,
    #[error("pause between deletions must be at least one second")]
    ItemDelayTooShort,
    #[error("account name must not be empty")]
    EmptyOwner,
    #[error("token must not be empty")]
    EmptyToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_codes() {
        assert_eq!(ServiceError::from_status(401), ServiceError::Unauthorized);
        assert_eq!(ServiceError::from_status(403), ServiceError::Forbidden);
        assert_eq!(ServiceError::from_status(404), ServiceError::NotFound);
        assert_eq!(ServiceError::from_status(502), ServiceError::Status(502));
    }

    #[test]
    fn deletion_error_collapses_auth_failures_to_forbidden() {
        assert_eq!(
            DeletionError::from(ServiceError::Unauthorized),
            DeletionError::Forbidden
        );
        assert_eq!(
            DeletionError::from(ServiceError::Forbidden),
            DeletionError::Forbidden
        );
        assert_eq!(
            DeletionError::from(ServiceError::NotFound),
            DeletionError::NotFound
        );
        let transient = DeletionError::from(ServiceError::Status(500));
        assert!(matches!(transient, DeletionError::Transient(ref msg) if msg.contains("500")));
    }

    #[test]
    fn missing_scopes_message_lists_scopes() {
        let err = VerifyError::MissingScopes {
            missing: vec!["repo".into(), "delete_repo".into()],
        };
        assert!(err.to_string().ends_with("repo, delete_repo"));
    }

    #[test]
    fn forbidden_has_hints() {
        assert_eq!(DeletionError::Forbidden.hints().len(), 3);
        assert!(DeletionError::Transient("x".into()).hints().is_empty());
    }
}
