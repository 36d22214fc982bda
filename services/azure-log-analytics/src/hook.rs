use crate::constants::*;
use crate::signer::{build_signature, SigningContext};
use crate::{Config, Credential};
use async_trait::async_trait;
use bytes::Bytes;
use http::{header, HeaderValue, Method};
use log::{debug, error, warn};
use logship_core::time::{format_http_date, now, DateTime};
use logship_core::utils::to_json_tab_indented;
use logship_core::{Context, Entry, Error, Hook, Level, Result};

/// Levels the hook subscribes to unless told otherwise.
const DEFAULT_LEVELS: [Level; 3] = [Level::Error, Level::Fatal, Level::Panic];

/// AzureLogHook posts entries to Azure Log Analytics through the HTTP Data
/// Collector API.
///
/// - [Send log data with the HTTP Data Collector API](https://learn.microsoft.com/en-us/azure/azure-monitor/logs/data-collector-api)
#[derive(Debug, Clone)]
pub struct AzureLogHook {
    ctx: Context,
    credential: Credential,
    endpoint: String,
    log_type: String,
    levels: Vec<Level>,
    time: Option<DateTime>,
}

impl AzureLogHook {
    /// Create a new hook from config.
    ///
    /// `customer_id`, `shared_key` and `log_type` are required, and
    /// `shared_key` must be valid base64.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let credential = Credential::new(
            config.customer_id.unwrap_or_default(),
            config.shared_key.unwrap_or_default(),
        );
        credential.check()?;

        let log_type = config
            .log_type
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("log_type is required"))?;

        let endpoint = config.endpoint.unwrap_or_else(|| {
            format!(
                "https://{}.ods.opinsights.azure.com{RESOURCE}?api-version={API_VERSION}",
                credential.customer_id
            )
        });

        Ok(Self {
            ctx,
            credential,
            endpoint,
            log_type,
            levels: DEFAULT_LEVELS.to_vec(),
            time: None,
        })
    }

    /// Replace the levels this hook subscribes to.
    pub fn with_levels(mut self, levels: impl Into<Vec<Level>>) -> Self {
        self.levels = levels.into();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The endpoint entries are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post an already encoded JSON body.
    ///
    /// The request is signed over the current date and the body length. A
    /// transport failure is returned as is. A response with a non-success
    /// status is returned as [`ErrorKind::RemoteRejected`](logship_core::ErrorKind::RemoteRejected).
    pub async fn post_log(&self, body: Bytes) -> Result<()> {
        let date = format_http_date(self.time.unwrap_or_else(now));
        let signing = SigningContext::new(date.as_str(), body.len());
        let authorization = build_signature(
            &self.credential.customer_id,
            &self.credential.shared_key,
            &signing,
        )?;

        let mut authorization: HeaderValue = authorization.parse()?;
        authorization.set_sensitive(true);

        let req = http::Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.as_str())
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header(header::AUTHORIZATION, authorization)
            .header(LOG_TYPE, self.log_type.as_str())
            .header(X_MS_DATE, date.as_str())
            .body(body)?;
        debug!("posting log to {}", self.endpoint);

        let resp = self.ctx.http_send_as_string(req).await.map_err(|err| {
            warn!("failed to post log to {}: {err}", self.endpoint);
            err
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("azure log analytics rejected log with status {status}");
            return Err(Error::remote_rejected(format!(
                "azure log analytics responded {status}: {}",
                resp.body()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Hook for AzureLogHook {
    fn levels(&self) -> &[Level] {
        &self.levels
    }

    async fn fire(&self, entry: &Entry) -> Result<()> {
        let body = to_json_tab_indented(&entry.fields).map_err(|err| {
            error!("failed to encode entry fields: {err}");
            err
        })?;

        self.post_log(Bytes::from(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use http::StatusCode;
    use logship_core::{ErrorKind, HttpSend};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    const CUSTOMER_ID: &str = "walrus-workspace";
    const SHARED_KEY: &str = "d2FscnVzLXNoYXJlZC1rZXktZm9yLXNpZ25hdHVyZS1maXh0dXJl";

    #[derive(Debug, Clone)]
    struct MockHttpSend {
        status: StatusCode,
        body: &'static str,
        requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    }

    impl MockHttpSend {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl HttpSend for MockHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            self.requests.lock().unwrap().push(req);
            Ok(http::Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))
                .unwrap())
        }
    }

    #[derive(Debug)]
    struct BrokenHttpSend;

    #[async_trait]
    impl HttpSend for BrokenHttpSend {
        async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            Err(Error::transport("connection refused"))
        }
    }

    fn config() -> Config {
        Config::new()
            .with_customer_id(CUSTOMER_ID)
            .with_shared_key(SHARED_KEY)
            .with_log_type("IntegrationTest")
    }

    #[tokio::test]
    async fn test_fire_posts_signed_request() {
        let _ = env_logger::builder().is_test(true).try_init();

        let http = MockHttpSend::new(StatusCode::OK, "");
        let ctx = Context::new().with_http_send(http.clone());
        let hook = AzureLogHook::new(ctx, config()).unwrap();

        let entry = Entry::new(Level::Error, "A walrus appears")
            .with_field("animal", "walrus")
            .with_field("number", 1);
        hook.fire(&entry).await.unwrap();

        let requests = http.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];

        assert_eq!(req.method(), Method::POST);
        assert_eq!(
            req.uri().to_string(),
            "https://walrus-workspace.ods.opinsights.azure.com/api/logs?api-version=2016-04-01"
        );
        assert_eq!(req.headers()["content-type"], "application/json");
        assert_eq!(req.headers()["log-type"], "IntegrationTest");
        assert_eq!(
            req.body().as_ref(),
            b"{\n\t\"animal\": \"walrus\",\n\t\"number\": 1\n}"
        );

        let date = req.headers()["x-ms-date"].to_str().unwrap();
        let expected = build_signature(
            CUSTOMER_ID,
            SHARED_KEY,
            &SigningContext::new(date, req.body().len()),
        )
        .unwrap();
        assert_eq!(req.headers()["authorization"], expected.as_str());
        assert!(req.headers()["authorization"].is_sensitive());
    }

    #[tokio::test]
    async fn test_post_log_with_fixed_time() {
        let http = MockHttpSend::new(StatusCode::OK, "");
        let ctx = Context::new().with_http_send(http.clone());
        let hook = AzureLogHook::new(ctx, config())
            .unwrap()
            .with_time(chrono::Utc.with_ymd_and_hms(2018, 5, 1, 23, 10, 18).unwrap());

        hook.post_log(Bytes::from(vec![b'a'; 60])).await.unwrap();

        let requests = http.requests.lock().unwrap();
        let req = &requests[0];
        assert_eq!(req.headers()["x-ms-date"], "Tue, 01 May 2018 23:10:18 GMT");
        assert_eq!(
            req.headers()["authorization"],
            "SharedKey walrus-workspace:bJKalKAy04RxAfomqwjII3i3PtgMpw4PENaU4NLSx34="
        );
    }

    #[tokio::test]
    async fn test_fire_transport_error() {
        let ctx = Context::new().with_http_send(BrokenHttpSend);
        let hook = AzureLogHook::new(ctx, config()).unwrap();

        let err = hook
            .fire(&Entry::new(Level::Error, "A walrus appears"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_fire_rejected() {
        let http = MockHttpSend::new(
            StatusCode::FORBIDDEN,
            r#"{"Error":"InvalidAuthorization","Message":"An invalid scheme was specified"}"#,
        );
        let ctx = Context::new().with_http_send(http);
        let hook = AzureLogHook::new(ctx, config()).unwrap();

        let err = hook
            .fire(&Entry::new(Level::Fatal, "A walrus appears"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RemoteRejected);
        assert!(err.to_string().contains("403 Forbidden"));
        assert!(err.to_string().contains("InvalidAuthorization"));
    }

    #[test]
    fn test_new_requires_config() {
        let cases = vec![
            Config::new().with_shared_key(SHARED_KEY).with_log_type("Logs"),
            Config::new().with_customer_id(CUSTOMER_ID).with_log_type("Logs"),
            Config::new()
                .with_customer_id(CUSTOMER_ID)
                .with_shared_key(SHARED_KEY),
            Config::new()
                .with_customer_id(CUSTOMER_ID)
                .with_shared_key("not base64!")
                .with_log_type("Logs"),
        ];

        for cfg in cases {
            let err = AzureLogHook::new(Context::new(), cfg.clone()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid, "Failed on input: {cfg:?}");
        }
    }

    #[test]
    fn test_endpoint_and_levels() {
        let hook = AzureLogHook::new(Context::new(), config()).unwrap();
        assert_eq!(
            hook.endpoint(),
            "https://walrus-workspace.ods.opinsights.azure.com/api/logs?api-version=2016-04-01"
        );
        assert_eq!(hook.levels(), &[Level::Error, Level::Fatal, Level::Panic]);

        let endpoint =
            "https://walrus-workspace.ods.opinsights.azure.us/api/logs?api-version=2016-04-01";
        let hook = AzureLogHook::new(Context::new(), config().with_endpoint(endpoint))
            .unwrap()
            .with_levels([Level::Warn]);
        assert_eq!(hook.endpoint(), endpoint);
        assert_eq!(hook.levels(), &[Level::Warn]);
    }
}
