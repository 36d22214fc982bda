//! Azure Log Analytics hook
//!
//! This crate ships log entries to an Azure Log Analytics workspace through
//! the HTTP Data Collector API, authenticated with a Shared Key signature.
//!
//! # Example
//!
//! ```rust,no_run
//! use logship_azure_log_analytics::{AzureLogHook, Config};
//! use logship_core::{Context, Dispatcher, Entry, Level, Result};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! // `ctx` must carry a real HttpSend, e.g. logship-http-send-reqwest.
//! let config = Config::new()
//!     .with_log_type("ApplicationErrors")
//!     .from_env(&ctx);
//! let hook = AzureLogHook::new(ctx, config)?;
//!
//! let dispatcher = Dispatcher::new().with_hook(hook);
//! dispatcher
//!     .fire(
//!         &Entry::new(Level::Error, "A walrus appears")
//!             .with_field("animal", "walrus")
//!             .with_field("number", 1),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{
    AZURE_LOG_ANALYTICS_CUSTOMER_ID, AZURE_LOG_ANALYTICS_ENDPOINT, AZURE_LOG_ANALYTICS_LOG_TYPE,
    AZURE_LOG_ANALYTICS_SHARED_KEY,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod signer;
pub use signer::{build_signature, SigningContext};

mod hook;
pub use hook::AzureLogHook;
