use crate::error::{DeletionError, ServiceError};
use crate::model::{RepositoryDetail, RepositorySummary};
use std::future::Future;
use std::pin::Pin;

pub type ServiceFuture<'a, T, E = ServiceError> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a>>;
pub type DetailFuture<'a> = Pin<Box<dyn Future<Output = Option<RepositoryDetail>> + 'a>>;

/// Contract of the remote hosting service. Implementations hold their own
/// credentials and client configuration.
pub trait RepoService {
    /// Login of the account the token resolves to.
    fn authenticated_login(&self) -> ServiceFuture<'_, String>;

    /// Scopes granted to the token, or `None` when the service does not
    /// report them.
    fn token_scopes(&self) -> ServiceFuture<'_, Option<Vec<String>>>;

    /// Every public repository of `owner`, across all pages. Private
    /// records are dropped even if the upstream filter lets them through.
    fn list_public_repos<'a>(&'a self, owner: &'a str)
    -> ServiceFuture<'a, Vec<RepositorySummary>>;

    /// Best-effort enrichment. Any failure yields `None`.
    fn fetch_detail<'a>(&'a self, owner: &'a str, name: &'a str) -> DetailFuture<'a>;

    fn delete_repo<'a>(&'a self, owner: &'a str, name: &'a str)
    -> ServiceFuture<'a, (), DeletionError>;
}
