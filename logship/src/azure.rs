//! Azure Log Analytics support with convenience APIs
//!
//! This module re-exports the Azure Log Analytics hook along with a
//! constructor wired to the default context.

// Re-export all Azure Log Analytics types
pub use logship_azure_log_analytics::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};
#[cfg(feature = "default-context")]
use log::warn;

/// Create an Azure Log Analytics hook with the default context.
///
/// Values missing from `config` are loaded from the environment:
/// `AZURE_LOG_ANALYTICS_CUSTOMER_ID`, `AZURE_LOG_ANALYTICS_SHARED_KEY`,
/// `AZURE_LOG_ANALYTICS_LOG_TYPE` and `AZURE_LOG_ANALYTICS_ENDPOINT`.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> logship_core::Result<()> {
/// use logship::azure::{default_hook, Config};
/// use logship::{Entry, Hook, Level};
///
/// let hook = default_hook(Config::new().with_log_type("ApplicationErrors"))?;
///
/// hook.fire(&Entry::new(Level::Error, "A walrus appears").with_field("animal", "walrus"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_hook(config: Config) -> Result<AzureLogHook> {
    let ctx = default_context();
    let config = config.from_env(&ctx);
    AzureLogHook::new(ctx, config).map_err(|err| {
        warn!("failed to build azure log analytics hook: {err}");
        err
    })
}
