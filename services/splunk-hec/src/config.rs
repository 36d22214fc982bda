use crate::constants::*;
use logship_core::utils::Redact;
use logship_core::{Context, Fields};
use serde_json::Value;
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for the Splunk HEC hook.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `url` of the event collector, e.g. `https://splunk:8088/services/collector`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPLUNK_HEC_URL`]
    pub url: Option<String>,
    /// HEC `token`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPLUNK_HEC_TOKEN`]
    pub token: Option<String>,
    /// Default `source`, usually the app name.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPLUNK_HEC_SOURCE`]
    pub source: Option<String>,
    /// Default `sourcetype`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPLUNK_HEC_SOURCETYPE`]
    pub source_type: Option<String>,
    /// Default `index`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPLUNK_HEC_INDEX`]
    pub index: Option<String>,
    /// `host` reported with every event.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPLUNK_HEC_HOST`]
    /// - the OS hostname
    pub host: Option<String>,
    /// Fields added to every entry, replacing entry fields of the same key.
    pub default_fields: Fields,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("token", &Redact::from(&self.token))
            .field("source", &self.source)
            .field("source_type", &self.source_type)
            .field("index", &self.index)
            .field("host", &self.host)
            .field("default_fields", &self.default_fields)
            .finish()
    }
}

impl Config {
    /// Create a new config with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collector url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the HEC token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the default source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the default sourcetype.
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    /// Set the default index.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set the reported host instead of the OS hostname.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Add a default field.
    pub fn with_default_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_fields.insert(key.into(), value.into());
        self
    }

    /// Replace all default fields.
    pub fn with_default_fields(mut self, fields: Fields) -> Self {
        self.default_fields = fields;
        self
    }

    /// Load config from env.
    ///
    /// Values already set on this config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let envs = ctx.env_vars();

        for (field, key) in [
            (&mut self.url, SPLUNK_HEC_URL),
            (&mut self.token, SPLUNK_HEC_TOKEN),
            (&mut self.source, SPLUNK_HEC_SOURCE),
            (&mut self.source_type, SPLUNK_HEC_SOURCETYPE),
            (&mut self.index, SPLUNK_HEC_INDEX),
            (&mut self.host, SPLUNK_HEC_HOST),
        ] {
            if field.is_none() {
                *field = envs.get(key).cloned();
            }
        }

        self
    }
}
