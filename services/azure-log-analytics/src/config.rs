use crate::constants::*;
use logship_core::utils::Redact;
use logship_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the Azure Log Analytics hook.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `customer_id` is the workspace id, it will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_LOG_ANALYTICS_CUSTOMER_ID`]
    pub customer_id: Option<String>,
    /// `shared_key` is the base64 encoded primary or secondary key of the
    /// workspace, it will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_LOG_ANALYTICS_SHARED_KEY`]
    pub shared_key: Option<String>,
    /// `log_type` is the record type entries are stored as, it will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_LOG_ANALYTICS_LOG_TYPE`]
    pub log_type: Option<String>,
    /// `endpoint` overrides the endpoint derived from `customer_id`.
    ///
    /// Only needed for clouds other than the public one. It will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_LOG_ANALYTICS_ENDPOINT`]
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("customer_id", &self.customer_id)
            .field("shared_key", &Redact::from(&self.shared_key))
            .field("log_type", &self.log_type)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Create a new config with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace customer id.
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Set the base64 encoded shared key.
    pub fn with_shared_key(mut self, shared_key: impl Into<String>) -> Self {
        self.shared_key = Some(shared_key.into());
        self
    }

    /// Set the log type.
    pub fn with_log_type(mut self, log_type: impl Into<String>) -> Self {
        self.log_type = Some(log_type.into());
        self
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set on this config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        if self.customer_id.is_none() {
            self.customer_id = envs.get(AZURE_LOG_ANALYTICS_CUSTOMER_ID).cloned();
        }
        if self.shared_key.is_none() {
            self.shared_key = envs.get(AZURE_LOG_ANALYTICS_SHARED_KEY).cloned();
        }
        if self.log_type.is_none() {
            self.log_type = envs.get(AZURE_LOG_ANALYTICS_LOG_TYPE).cloned();
        }
        if self.endpoint.is_none() {
            self.endpoint = envs.get(AZURE_LOG_ANALYTICS_ENDPOINT).cloned();
        }

        self
    }
}
