use std::time::Duration;

use async_trait::async_trait;

/// Source of delays for scheduled continuations.
///
/// Production code uses [`TokioTimer`]; tests either pause tokio's clock or
/// swap in a timer that records what it was asked to wait for.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
