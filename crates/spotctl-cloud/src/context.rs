//! Cancellation context threaded through every backend call

use crate::error::{CloudError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation token plus an optional deadline.
///
/// A context never imposes a timeout on its own; callers opt in through
/// [`Context::with_timeout`].
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context driven by an externally owned token (e.g. a Ctrl-C handler)
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` to completion unless the context is cancelled or its deadline passes first.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.token.is_cancelled() {
            return Err(CloudError::Cancelled);
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(CloudError::Cancelled),
                    _ = tokio::time::sleep_until(deadline) => Err(CloudError::DeadlineExceeded),
                    result = fut => result,
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => Err(CloudError::Cancelled),
                    result = fut => result,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let ctx = Context::new();
        let value = ctx.run(async { Ok::<_, CloudError>(42) }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_cancelled_context_short_circuits() {
        let ctx = Context::new();
        ctx.cancel();

        let err = ctx
            .run(async { Ok::<_, CloudError>(()) })
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_call() {
        let ctx = Context::new();
        let canceller = ctx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let err = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, CloudError>(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded() {
        let ctx = Context::new().with_timeout(Duration::from_secs(5));

        let err = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<_, CloudError>(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CloudError::DeadlineExceeded));
        assert!(err.is_cancellation());
    }
}
