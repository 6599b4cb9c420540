use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Trailing-edge debouncer.
///
/// Every edit calls [`Debouncer::settle`]. Only the call that is still the most
/// recent once the window has elapsed resolves to `true`; all earlier calls
/// resolve to `false`. Clones share the same generation counter.
#[derive(Clone, Debug)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
    window: Duration,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            window,
        }
    }

    /// Waits out the window. Returns whether no newer edit arrived meanwhile.
    pub async fn settle(&self) -> bool {
        let claimed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;
        self.generation.load(Ordering::SeqCst) == claimed
    }
}

impl PartialEq for Debouncer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.generation, &other.generation) && self.window == other.window
    }
}
