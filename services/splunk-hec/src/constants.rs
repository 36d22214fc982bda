use std::time::Duration;

/// Timeout of the client built for the hook by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

// Env values used by the config loader.
pub const SPLUNK_HEC_URL: &str = "SPLUNK_HEC_URL";
pub const SPLUNK_HEC_TOKEN: &str = "SPLUNK_HEC_TOKEN";
pub const SPLUNK_HEC_SOURCE: &str = "SPLUNK_HEC_SOURCE";
pub const SPLUNK_HEC_SOURCETYPE: &str = "SPLUNK_HEC_SOURCETYPE";
pub const SPLUNK_HEC_INDEX: &str = "SPLUNK_HEC_INDEX";
pub const SPLUNK_HEC_HOST: &str = "SPLUNK_HEC_HOST";
