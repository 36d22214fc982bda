//! Splunk HTTP Event Collector hook
//!
//! This crate ships log entries to a Splunk HTTP Event Collector (HEC),
//! authenticated with a `Splunk {token}` header.
//!
//! # Example
//!
//! ```rust,no_run
//! use logship_core::{Context, Entry, Hook, Level, Result};
//! use logship_splunk_hec::{Config, SplunkHook};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! // `ctx` must carry a real HttpSend, e.g. logship-http-send-reqwest.
//! let config = Config::new()
//!     .with_url("https://splunk:8088/services/collector/event")
//!     .with_token("11111111-2222-3333-4444-555555555555")
//!     .with_source("walrus-app")
//!     .with_source_type("_json")
//!     .with_index("main")
//!     .with_default_field("env", "prod");
//! let hook = SplunkHook::new(ctx, config)?;
//!
//! hook.fire(&Entry::new(Level::Error, "A walrus appears").with_field("animal", "walrus"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    DEFAULT_TIMEOUT, SPLUNK_HEC_HOST, SPLUNK_HEC_INDEX, SPLUNK_HEC_SOURCE, SPLUNK_HEC_SOURCETYPE,
    SPLUNK_HEC_TOKEN, SPLUNK_HEC_URL,
};

mod config;
pub use config::Config;

mod event;
pub use event::Event;

mod hook;
pub use hook::{level_label, SplunkHook};
