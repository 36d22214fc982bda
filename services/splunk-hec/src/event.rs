use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event is the envelope accepted by the HEC `/services/collector/event` endpoint.
///
/// Every field is required by the collector, callers must make sure they are
/// not empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Epoch time in seconds.
    pub time: i64,
    /// Hostname of the emitter.
    pub host: String,
    /// App name.
    pub source: String,
    /// Splunk bucket to group logs in.
    #[serde(rename = "sourcetype")]
    pub source_type: String,
    /// Index the event is stored in.
    pub index: String,
    /// Any useful key/value pairs.
    pub event: Value,
}
