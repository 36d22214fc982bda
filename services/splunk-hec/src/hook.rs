use crate::{Config, Event};
use async_trait::async_trait;
use bytes::Bytes;
use http::{header, HeaderValue, Method, StatusCode};
use log::{debug, error, warn};
use logship_core::time::{now, unix_timestamp};
use logship_core::utils::{to_json_tab_indented, Redact};
use logship_core::{merge_fields, Context, Entry, Error, Fields, Hook, Level, Result};
use serde_json::Value;
use std::fmt::{Debug, Formatter};

/// Levels the hook subscribes to unless told otherwise.
const DEFAULT_LEVELS: [Level; 3] = [Level::Error, Level::Fatal, Level::Panic];

/// Label sent as `logLevel` for an entry level.
///
/// Only debug, info, error, fatal and panic have their own label, every other
/// level is reported as `info`.
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Error => "error",
        Level::Fatal => "fatal",
        Level::Panic => "panic",
        _ => "info",
    }
}

/// SplunkHook posts entries to a Splunk HTTP Event Collector.
#[derive(Clone)]
pub struct SplunkHook {
    ctx: Context,
    url: String,
    hostname: String,
    token: String,
    source: String,
    source_type: String,
    index: String,
    default_fields: Fields,
    levels: Vec<Level>,
}

impl Debug for SplunkHook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplunkHook")
            .field("ctx", &self.ctx)
            .field("url", &self.url)
            .field("hostname", &self.hostname)
            .field("token", &Redact::from(&self.token))
            .field("source", &self.source)
            .field("source_type", &self.source_type)
            .field("index", &self.index)
            .field("default_fields", &self.default_fields)
            .field("levels", &self.levels)
            .finish()
    }
}

impl SplunkHook {
    /// Create a new hook from config.
    ///
    /// `url` and `token` are required. The host falls back to the OS
    /// hostname when not configured.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let url = config
            .url
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("url is required"))?;
        let token = config
            .token
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("token is required"))?;
        let hostname = config
            .host
            .filter(|v| !v.is_empty())
            .unwrap_or_else(resolve_hostname);

        Ok(Self {
            ctx,
            url,
            hostname,
            token,
            source: config.source.unwrap_or_default(),
            source_type: config.source_type.unwrap_or_default(),
            index: config.index.unwrap_or_default(),
            default_fields: config.default_fields,
            levels: DEFAULT_LEVELS.to_vec(),
        })
    }

    /// Replace the levels this hook subscribes to.
    pub fn with_levels(mut self, levels: impl Into<Vec<Level>>) -> Self {
        self.levels = levels.into();
        self
    }

    /// Host reported with every event.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Build the fields sent for an entry.
    ///
    /// The entry fields are extended with `logLevel` and `message`, then the
    /// default fields are laid on top.
    pub fn payload(&self, entry: &Entry) -> Fields {
        let mut fields = entry.fields.clone();
        fields.insert(
            "logLevel".to_string(),
            Value::from(level_label(entry.level)),
        );
        fields.insert("message".to_string(), Value::from(entry.message.as_str()));

        merge_fields(&fields, &self.default_fields)
    }

    /// Wrap an encoded payload into an event with the hook defaults and send it.
    pub async fn log(&self, payload: String) -> Result<()> {
        let event = self.new_event(payload, &self.source, &self.source_type, &self.index);
        self.log_event(&event).await
    }

    /// Create an event stamped with current time and the hook host.
    pub fn new_event(
        &self,
        payload: impl Into<Value>,
        source: &str,
        source_type: &str,
        index: &str,
    ) -> Event {
        Event {
            time: unix_timestamp(now()),
            host: self.hostname.clone(),
            source: source.to_string(),
            source_type: source_type.to_string(),
            index: index.to_string(),
            event: payload.into(),
        }
    }

    /// Send a single event.
    pub async fn log_event(&self, event: &Event) -> Result<()> {
        let body = serde_json::to_vec(event)?;
        self.send(Bytes::from(body)).await
    }

    async fn send(&self, body: Bytes) -> Result<()> {
        let mut authorization: HeaderValue = format!("Splunk {}", self.token).parse()?;
        authorization.set_sensitive(true);

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(self.url.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization)
            .body(body)?;
        debug!("sending event to {}", self.url);

        let resp = self.ctx.http_send_as_string(req).await.map_err(|err| {
            warn!("failed to send event to {}: {err}", self.url);
            err
        })?;

        match resp.status() {
            StatusCode::OK => Ok(()),
            status => {
                warn!("splunk rejected event with status {status}");
                Err(Error::remote_rejected(resp.into_body()))
            }
        }
    }
}

#[async_trait]
impl Hook for SplunkHook {
    fn levels(&self) -> &[Level] {
        &self.levels
    }

    async fn fire(&self, entry: &Entry) -> Result<()> {
        let payload = to_json_tab_indented(&self.payload(entry)).map_err(|err| {
            error!("failed to encode entry fields: {err}");
            err
        })?;

        let payload = String::from_utf8(payload).map_err(|e| {
            Error::serialization_failed("entry fields are not valid utf-8").with_source(e)
        })?;
        self.log(payload).await
    }
}

fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(err) => {
            warn!("failed to resolve hostname: {err}");
            String::new()
        }
    }
}
