//! Deadline enforcement shared by the use cases.

use std::future::Future;
use std::time::Duration;

use bookhub_domain::error::{BookHubError, TimeoutError};

/// Deadline applied to every storage call when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Drive `call` to completion or fail once `after` has elapsed.
///
/// On elapse the pending future is dropped, which cancels the in-flight
/// statement; no compensating write is attempted.
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    after: Duration,
    call: F,
) -> Result<T, BookHubError>
where
    F: Future<Output = Result<T, BookHubError>>,
{
    if let Ok(result) = tokio::time::timeout(after, call).await {
        result
    } else {
        tracing::warn!(operation, ?after, "deadline exceeded, storage call cancelled");
        Err(TimeoutError { operation, after }.into())
    }
}
