use anyhow::Context;
use purge_core::error::{DeletionError, ServiceError};
use purge_core::model::{Credentials, RepositoryDetail, RepositorySummary};
use purge_core::provider::{DetailFuture, RepoService, ServiceFuture};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response};
use tracing::{debug, warn};

use crate::client::{self, ClientConfig};
use crate::github_models::{RepoDetailItem, UserItem, parse_scopes_header};
use crate::github_paging::{collect_public_pages, fetch_repos_page};
use crate::http::{RetryPolicy, ensure_success, send_with_retry, transport_error};

/// GitHub REST implementation of [`RepoService`].
pub struct GitHubService {
    client: Client,
    config: ClientConfig,
    credentials: Credentials,
}

impl GitHubService {
    pub fn new(config: ClientConfig, credentials: Credentials) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(client::ACCEPT));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_str(&config.api_version).context("invalid API version header")?,
        );
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    async fn send(&self, method: Method, url: String) -> Result<Response, ServiceError> {
        let policy = RetryPolicy::for_method(&method);
        let builder = self
            .client
            .request(method, url)
            .bearer_auth(self.credentials.token());
        send_with_retry(policy, || {
            builder
                .try_clone()
                .ok_or_else(|| ServiceError::Transport("clone request".to_string()))
        })
        .await
    }

    async fn get_user(&self) -> Result<Response, ServiceError> {
        let response = self.send(Method::GET, self.config.url("user")).await?;
        ensure_success(response)
    }

    async fn detail(&self, owner: &str, name: &str) -> Result<RepositoryDetail, ServiceError> {
        let url = self.config.url(&format!("repos/{owner}/{name}"));
        let response = ensure_success(self.send(Method::GET, url).await?)?;
        let item: RepoDetailItem = response.json().await.map_err(transport_error)?;
        Ok(item.into())
    }
}

impl RepoService for GitHubService {
    fn authenticated_login(&self) -> ServiceFuture<'_, String> {
        Box::pin(async move {
            let user: UserItem = self.get_user().await?.json().await.map_err(transport_error)?;
            Ok(user.login)
        })
    }

    fn token_scopes(&self) -> ServiceFuture<'_, Option<Vec<String>>> {
        Box::pin(async move {
            let response = self.get_user().await?;
            let scopes = response
                .headers()
                .get("x-oauth-scopes")
                .and_then(|value| value.to_str().ok())
                .map(parse_scopes_header);
            Ok(scopes)
        })
    }

    fn list_public_repos<'a>(
        &'a self,
        owner: &'a str,
    ) -> ServiceFuture<'a, Vec<RepositorySummary>> {
        Box::pin(async move {
            let token = self.credentials.token();
            collect_public_pages(|page| {
                fetch_repos_page(&self.client, &self.config, token, owner, page)
            })
            .await
        })
    }

    fn fetch_detail<'a>(&'a self, owner: &'a str, name: &'a str) -> DetailFuture<'a> {
        Box::pin(async move {
            match self.detail(owner, name).await {
                Ok(detail) => Some(detail),
                Err(err) => {
                    warn!(
                        repo = %format!("{owner}/{name}"),
                        error = %err,
                        "repository details unavailable"
                    );
                    None
                }
            }
        })
    }

    fn delete_repo<'a>(
        &'a self,
        owner: &'a str,
        name: &'a str,
    ) -> ServiceFuture<'a, (), DeletionError> {
        Box::pin(async move {
            let url = self.config.url(&format!("repos/{owner}/{name}"));
            let response = self.send(Method::DELETE, url).await?;
            ensure_success(response)?;
            debug!(repo = %format!("{owner}/{name}"), "delete request accepted");
            Ok(())
        })
    }
}
