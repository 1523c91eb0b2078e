use crate::application::{
    dto::Sourced,
    error::ApplicationResult,
    ports::{reachability::ReachabilityProbe, remote::TransportResult},
};
use crate::domain::errors::DomainResult;
use std::{future::Future, sync::Arc};

/// Serves an operation from the remote API when the probe allows it and from
/// the local store otherwise, or after any remote failure.
pub struct RemoteFirst {
    probe: Arc<dyn ReachabilityProbe>,
}

impl RemoteFirst {
    pub fn new(probe: Arc<dyn ReachabilityProbe>) -> Self {
        Self { probe }
    }

    pub async fn serve<T, RF, R, LF, L>(
        &self,
        operation: &'static str,
        remote: RF,
        local: LF,
    ) -> ApplicationResult<Sourced<T>>
    where
        RF: FnOnce() -> R,
        R: Future<Output = TransportResult<T>>,
        LF: FnOnce() -> L,
        L: Future<Output = DomainResult<T>>,
    {
        if !self.probe.is_reachable().await {
            tracing::debug!(operation, "remote API unreachable; using local store");
            return Ok(Sourced::fallback(local().await?));
        }

        match remote().await {
            Ok(data) => Ok(Sourced::remote(data)),
            Err(err) => {
                tracing::warn!(
                    operation,
                    error = %err,
                    timeout = err.is_timeout(),
                    "remote API call failed; serving from local store"
                );
                Ok(Sourced::fallback(local().await?))
            }
        }
    }
}
