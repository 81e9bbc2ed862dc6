use crate::error::{ServiceError, VerifyError};
use crate::model::Credentials;
use crate::provider::RepoService;
use tracing::debug;

pub const REQUIRED_SCOPES: [&str; 2] = ["repo", "delete_repo"];

/// Checks that the token resolves to the claimed owner. Logins are compared
/// case-insensitively, as the hosting service treats them.
pub async fn verify_identity(
    service: &dyn RepoService,
    credentials: &Credentials,
) -> Result<(), VerifyError> {
    let login = service
        .authenticated_login()
        .await
        .map_err(|err| match err {
            ServiceError::Unauthorized => VerifyError::InvalidToken,
            other => VerifyError::Identity(other),
        })?;
    if !login.eq_ignore_ascii_case(credentials.owner()) {
        return Err(VerifyError::IdentityMismatch {
            expected: credentials.owner().to_string(),
            actual: login,
        });
    }
    debug!(login = %login, "token identity verified");
    Ok(())
}

pub async fn verify_scopes(
    service: &dyn RepoService,
    required: &[&str],
) -> Result<(), VerifyError> {
    let granted = service
        .token_scopes()
        .await
        .map_err(|err| match err {
            ServiceError::Unauthorized => VerifyError::InvalidToken,
            other => VerifyError::Scopes(other),
        })?
        .ok_or(VerifyError::ScopesUnavailable)?;
    let missing = missing_scopes(&granted, required);
    if !missing.is_empty() {
        return Err(VerifyError::MissingScopes { missing });
    }
    debug!(scopes = ?granted, "token scopes verified");
    Ok(())
}

pub fn missing_scopes(granted: &[String], required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|scope| !granted.iter().any(|have| have == *scope))
        .map(|scope| scope.to_string())
        .collect()
}

/// What each required scope is used for.
pub fn scope_purpose(scope: &str) -> Option<&'static str> {
    match scope {
        "repo" => Some("read repository information"),
        "delete_repo" => Some("delete repositories"),
        _ => None,
    }
}
