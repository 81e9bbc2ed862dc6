use purge_core::model::{RepositoryDetail, RepositorySummary};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct UserItem {
    pub(crate) login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepoItem {
    pub(crate) name: String,
    pub(crate) full_name: String,
    #[serde(default)]
    pub(crate) private: bool,
}

impl From<RepoItem> for RepositorySummary {
    fn from(item: RepoItem) -> Self {
        Self {
            name: item.name,
            full_name: item.full_name,
            private: item.private,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepoDetailItem {
    pub(crate) full_name: String,
    pub(crate) html_url: String,
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
    #[serde(default)]
    pub(crate) updated_at: Option<String>,
    #[serde(default)]
    pub(crate) stargazers_count: u64,
    #[serde(default)]
    pub(crate) forks_count: u64,
    pub(crate) language: Option<String>,
    #[serde(default)]
    pub(crate) fork: bool,
    pub(crate) license: Option<LicenseItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LicenseItem {
    pub(crate) name: String,
}

impl From<RepoDetailItem> for RepositoryDetail {
    fn from(item: RepoDetailItem) -> Self {
        Self {
            full_name: item.full_name,
            html_url: item.html_url,
            description: item.description.filter(|value| !value.trim().is_empty()),
            created_at: item.created_at.unwrap_or_default(),
            updated_at: item.updated_at.unwrap_or_default(),
            stars: item.stargazers_count,
            forks: item.forks_count,
            language: item.language,
            fork: item.fork,
            license: item.license.map(|license| license.name),
        }
    }
}

pub(crate) fn parse_scopes_header(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|scope| scope.trim())
        .filter(|scope| !scope.is_empty())
        .map(|scope| scope.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repo_item_keeps_private_flag() {
        let value = json!({
            "id": 1,
            "name": "repo",
            "full_name": "me/repo",
            "private": true,
            "owner": { "login": "me" }
        });
        let repo: RepositorySummary = serde_json::from_value::<RepoItem>(value).unwrap().into();
        assert!(repo.private);
        assert_eq!(repo.full_name, "me/repo");
    }

    #[test]
    fn detail_maps_optional_fields() {
        let value = json!({
            "full_name": "me/repo",
            "html_url": "https://github.com/me/repo",
            "description": "",
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z",
            "stargazers_count": 7,
            "forks_count": 2,
            "language": null,
            "fork": true,
            "license": { "key": "mit", "name": "MIT License" }
        });
        let detail: RepositoryDetail = serde_json::from_value::<RepoDetailItem>(value)
            .unwrap()
            .into();
        assert_eq!(detail.description, None);
        assert_eq!(detail.language, None);
        assert_eq!(detail.stars, 7);
        assert!(detail.fork);
        assert_eq!(detail.license.as_deref(), Some("MIT License"));
    }

    #[test]
    fn detail_without_license() {
        let value = json!({
            "full_name": "me/repo",
            "html_url": "https://github.com/me/repo",
            "description": "tools",
            "language": "Rust",
            "license": null
        });
        let detail: RepositoryDetail = serde_json::from_value::<RepoDetailItem>(value)
            .unwrap()
            .into();
        assert_eq!(detail.description.as_deref(), Some("tools"));
        assert_eq!(detail.license, None);
        assert!(!detail.fork);
    }

    #[test]
    fn parse_scopes_header_splits() {
        let scopes = parse_scopes_header("repo, delete_repo, ");
        assert_eq!(scopes, vec!["repo".to_string(), "delete_repo".to_string()]);
        assert!(parse_scopes_header("").is_empty());
    }
}
