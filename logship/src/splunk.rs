//! Splunk HEC support with convenience APIs
//!
//! This module re-exports the Splunk HEC hook along with a constructor wired
//! to a client suited for self-hosted collectors.

// Re-export all Splunk HEC types
pub use logship_splunk_hec::*;

#[cfg(feature = "default-context")]
use crate::{Context, Error, OsEnv, Result};
#[cfg(feature = "default-context")]
use log::warn;
#[cfg(feature = "default-context")]
use logship_http_send_reqwest::ReqwestHttpSend;

/// Create a Splunk HEC hook with a default client.
///
/// The client does NOT verify TLS certificates, collectors are commonly
/// deployed with self-signed ones, and gives up after [`DEFAULT_TIMEOUT`].
/// Build the hook with [`SplunkHook::new`] and your own context to change that.
///
/// Values missing from `config` are loaded from the environment:
/// `SPLUNK_HEC_URL`, `SPLUNK_HEC_TOKEN`, `SPLUNK_HEC_SOURCE`,
/// `SPLUNK_HEC_SOURCETYPE`, `SPLUNK_HEC_INDEX` and `SPLUNK_HEC_HOST`.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> logship_core::Result<()> {
/// use logship::splunk::{default_hook, Config};
/// use logship::{Entry, Hook, Level};
///
/// let hook = default_hook(
///     Config::new()
///         .with_source("walrus-app")
///         .with_default_field("env", "prod"),
/// )?;
///
/// hook.fire(&Entry::new(Level::Error, "A walrus appears").with_field("animal", "walrus"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_hook(config: Config) -> Result<SplunkHook> {
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv);
    let config = config.from_env(&ctx);
    SplunkHook::new(ctx, config).map_err(|err| {
        warn!("failed to build splunk hec hook: {err}");
        err
    })
}
