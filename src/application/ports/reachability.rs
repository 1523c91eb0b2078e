use async_trait::async_trait;

/// Decides whether the remote API is worth calling at all. An unreachable
/// answer sends every façade call straight to the local store.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}
