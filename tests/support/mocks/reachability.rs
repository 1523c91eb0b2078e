// tests/support/mocks/reachability.rs
use async_trait::async_trait;
use folio_core::application::ports::reachability::ReachabilityProbe;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed answer that remembers how often it was asked.
#[derive(Debug, Default)]
pub struct CountingProbe {
    reachable: bool,
    calls: AtomicUsize,
}

impl CountingProbe {
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn reachable() -> Self {
        Self {
            reachable: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReachabilityProbe for CountingProbe {
    async fn is_reachable(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reachable
    }
}
