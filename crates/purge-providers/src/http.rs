use purge_core::error::ServiceError;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use reqwest::{RequestBuilder, Response};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

const MAX_ATTEMPTS: u32 = 3;
const FALLBACK_DELAY: Duration = Duration::from_secs(1);
const MAX_DELAY: Duration = Duration::from_secs(60);

/// Which throttling answers may be retried for a request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RetryPolicy {
    /// Reads: 429 and 503.
    RateLimited,
    /// Mutations: 429 only. A 503 may come back after the change was applied.
    TooManyRequestsOnly,
}

impl RetryPolicy {
    pub(crate) fn for_method(method: &Method) -> Self {
        if *method == Method::GET || *method == Method::HEAD {
            RetryPolicy::RateLimited
        } else {
            RetryPolicy::TooManyRequestsOnly
        }
    }

    fn allows(self, status: StatusCode) -> bool {
        match self {
            RetryPolicy::RateLimited => is_retryable(status),
            RetryPolicy::TooManyRequestsOnly => status == StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

/// Sends the request, retrying only the rate-limit answers `policy` allows.
/// Every other response is returned as-is for the caller to classify.
pub(crate) async fn send_with_retry<F>(
    policy: RetryPolicy,
    mut build: F,
) -> Result<Response, ServiceError>
where
    F: FnMut() -> Result<RequestBuilder, ServiceError>,
{
    let mut attempt = 1;
    loop {
        let response = build()?.send().await.map_err(transport_error)?;
        let status = response.status();
        if !policy.allows(status) || attempt >= MAX_ATTEMPTS {
            return Ok(response);
        }
        let delay = retry_delay_from_headers(response.headers())
            .unwrap_or(FALLBACK_DELAY)
            .min(MAX_DELAY);
        debug!(
            status = %status,
            attempt,
            delay_ms = delay.as_millis() as u64,
            "rate limited, retrying"
        );
        let _ = response.bytes().await;
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

pub(crate) fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ServiceError::from_status(status.as_u16()))
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_decode() {
        ServiceError::Decode(err.to_string())
    } else {
        ServiceError::Transport(err.to_string())
    }
}

fn is_retryable(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE
    )
}

fn retry_delay_from_headers(headers: &HeaderMap) -> Option<Duration> {
    if let Some(delay) = retry_after_seconds(headers) {
        return Some(Duration::from_secs(delay));
    }
    ratelimit_reset_seconds(headers).map(Duration::from_secs)
}

fn retry_after_seconds(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("retry-after")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
}

fn ratelimit_reset_seconds(headers: &HeaderMap) -> Option<u64> {
    let reset = headers
        .get("x-ratelimit-reset")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())?;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    if reset <= now { None } else { Some(reset - now) }
}
