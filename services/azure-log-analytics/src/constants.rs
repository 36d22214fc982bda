// Request shape of the HTTP Data Collector API.
pub const METHOD: &str = "POST";
pub const CONTENT_TYPE: &str = "application/json";
pub const RESOURCE: &str = "/api/logs";
pub const API_VERSION: &str = "2016-04-01";

// Headers
pub const X_MS_DATE: &str = "x-ms-date";
pub const LOG_TYPE: &str = "log-type";

// Env values used by the config loader.
pub const AZURE_LOG_ANALYTICS_CUSTOMER_ID: &str = "AZURE_LOG_ANALYTICS_CUSTOMER_ID";
pub const AZURE_LOG_ANALYTICS_SHARED_KEY: &str = "AZURE_LOG_ANALYTICS_SHARED_KEY";
pub const AZURE_LOG_ANALYTICS_LOG_TYPE: &str = "AZURE_LOG_ANALYTICS_LOG_TYPE";
pub const AZURE_LOG_ANALYTICS_ENDPOINT: &str = "AZURE_LOG_ANALYTICS_ENDPOINT";
