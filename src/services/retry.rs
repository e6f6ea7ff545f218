use crate::config::Config;
use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Retries an async operation with exponential backoff while it reports
/// `AppError::RateLimited`.
///
/// Makes at most [`Config::MAX_FETCH_ATTEMPTS`] attempts, waiting 100ms,
/// then 500ms, then 2500ms and so on between them. Any other error is
/// returned immediately.
pub async fn retry_rate_limited<F, Fut, T>(mut operation: F) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let max_attempts = Config::MAX_FETCH_ATTEMPTS;
    let mut delay_ms = 100;

    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(AppError::RateLimited) if attempt < max_attempts => {
                gloo::console::warn!(&format!(
                    "Series endpoint rate limited, retrying in {}ms (attempt {}/{})",
                    delay_ms, attempt, max_attempts
                ));
                TimeoutFuture::new(delay_ms).await;
                delay_ms *= 5;
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::RateLimited)
}
