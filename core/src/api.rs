use crate::{Entry, Level, Result};
use std::fmt::Debug;

/// Hook is the trait implemented by every log shipping adapter.
///
/// A hook is registered for a set of levels and receives each entry emitted
/// at one of them. Hooks are not tied to a specific logging library: anything
/// that can build an [`Entry`] can fire them.
#[async_trait::async_trait]
pub trait Hook: Debug + Send + Sync + 'static {
    /// Levels this hook wants to receive.
    fn levels(&self) -> &[Level];

    /// Deliver the entry.
    ///
    /// ## Behavior
    ///
    /// - Delivery completes before this returns: one request, no background work.
    /// - Failures are returned as is, the hook never retries.
    async fn fire(&self, entry: &Entry) -> Result<()>;
}
