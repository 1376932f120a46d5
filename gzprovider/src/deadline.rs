//! Per-call deadlines for provider requests.

use std::future::Future;
use std::time::Duration;

use crate::ProviderError;

/// Drives `future` to completion unless `limit` elapses first, in which case the
/// in-flight request is dropped and a timeout error is returned.
pub async fn with_deadline<T, F>(limit: Duration, future: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::timeout(format!(
            "request exceeded {}ms deadline",
            limit.as_millis()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[tokio::test]
    async fn completes_when_future_finishes_in_time() {
        let result = with_deadline(Duration::from_secs(5), async { Ok::<_, ProviderError>(7) }).await;
        assert_eq!(result.expect("should complete"), 7);
    }

    #[tokio::test]
    async fn maps_elapsed_deadline_to_timeout() {
        let result = with_deadline(
            Duration::from_millis(20),
            std::future::pending::<Result<(), ProviderError>>(),
        )
        .await;

        let error = result.expect_err("pending future must time out");
        assert_eq!(error.kind, ProviderErrorKind::Timeout);
        assert!(error.message.contains("20ms"));
    }

    #[tokio::test]
    async fn inner_errors_pass_through_unchanged() {
        let result = with_deadline(Duration::from_secs(5), async {
            Err::<(), _>(ProviderError::rate_limited("slow down"))
        })
        .await;

        assert_eq!(
            result.expect_err("inner error").kind,
            ProviderErrorKind::RateLimited
        );
    }
}
