use purge_core::error::ServiceError;
use purge_core::model::RepositorySummary;
use reqwest::Client;
use std::future::Future;
use tracing::debug;

use crate::client::ClientConfig;
use crate::github_models::RepoItem;
use crate::http::{RetryPolicy, ensure_success, send_with_retry, transport_error};

pub(crate) fn repos_url(config: &ClientConfig, owner: &str, page: u32) -> String {
    config.url(&format!(
        "users/{owner}/repos?type=public&per_page={}&page={page}",
        config.per_page
    ))
}

pub(crate) async fn fetch_repos_page(
    client: &Client,
    config: &ClientConfig,
    token: &str,
    owner: &str,
    page: u32,
) -> Result<Vec<RepoItem>, ServiceError> {
    let builder = client.get(repos_url(config, owner, page)).bearer_auth(token);
    let response = send_with_retry(RetryPolicy::RateLimited, || {
        builder
            .try_clone()
            .ok_or_else(|| ServiceError::Transport("clone request".to_string()))
    })
    .await?;
    let response = ensure_success(response)?;
    response.json().await.map_err(transport_error)
}

/// Walks pages from 1 until one comes back empty. Private records are
/// dropped whatever the upstream filter did. Nothing is returned until every
/// page has been read.
pub(crate) async fn collect_public_pages<F, Fut>(
    mut fetch_page: F,
) -> Result<Vec<RepositorySummary>, ServiceError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<RepoItem>, ServiceError>>,
{
    let mut page = 1;
    let mut repos = Vec::new();
    loop {
        let payload = fetch_page(page).await?;
        if payload.is_empty() {
            break;
        }
        debug!(page, count = payload.len(), "fetched repository page");
        repos.extend(
            payload
                .into_iter()
                .filter(|item| !item.private)
                .map(RepositorySummary::from),
        );
        page += 1;
    }
    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn item(index: usize, private: bool) -> RepoItem {
        RepoItem {
            name: format!("repo-{index}"),
            full_name: format!("me/repo-{index}"),
            private,
        }
    }

    fn pages(total: usize, per_page: usize, private_every: usize) -> Vec<Vec<(usize, bool)>> {
        let all: Vec<(usize, bool)> = (0..total)
            .map(|i| (i, private_every > 0 && i % private_every == 0))
            .collect();
        all.chunks(per_page).map(|chunk| chunk.to_vec()).collect()
    }

    #[test]
    fn repos_url_requests_public_only() {
        let config = ClientConfig::default();
        assert_eq!(
            repos_url(&config, "me", 3),
            "https://api.github.com/users/me/repos?type=public&per_page=100&page=3"
        );
    }

    #[tokio::test]
    async fn collects_every_page_and_drops_private() {
        let source = pages(250, 100, 10);
        let requested = Cell::new(0u32);
        let repos = collect_public_pages(|page| {
            requested.set(page);
            let payload: Vec<RepoItem> = source
                .get(page as usize - 1)
                .map(|chunk| chunk.iter().map(|(i, p)| item(*i, *p)).collect())
                .unwrap_or_default();
            async move { Ok::<_, ServiceError>(payload) }
        })
        .await
        .unwrap();

        assert_eq!(repos.len(), 225);
        assert!(repos.iter().all(|repo| !repo.private));
        assert_eq!(repos[0].name, "repo-1");
        assert_eq!(requested.get(), 4);
    }

    #[tokio::test]
    async fn exact_page_multiple_needs_one_empty_page() {
        let source = pages(200, 100, 0);
        let repos = collect_public_pages(|page| {
            let payload: Vec<RepoItem> = source
                .get(page as usize - 1)
                .map(|chunk| chunk.iter().map(|(i, p)| item(*i, *p)).collect())
                .unwrap_or_default();
            async move { Ok::<_, ServiceError>(payload) }
        })
        .await
        .unwrap();
        assert_eq!(repos.len(), 200);
    }

    #[tokio::test]
    async fn page_error_discards_partial_list() {
        let result = collect_public_pages(|page| async move {
            if page == 1 {
                Ok(vec![item(1, false)])
            } else {
                Err(ServiceError::Status(502))
            }
        })
        .await;
        assert_eq!(result.unwrap_err(), ServiceError::Status(502));
    }
}
