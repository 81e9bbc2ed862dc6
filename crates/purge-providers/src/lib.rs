pub mod client;
pub mod github;
mod github_models;
mod github_paging;
mod http;

pub use client::{ClientConfig, DEFAULT_API_URL};
pub use github::GitHubService;
