use crate::constants::*;
use log::debug;
use logship_core::hash::{base64_decode, base64_hmac_sha256};
use logship_core::{Error, Result};

/// SigningContext carries the per request values covered by the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    /// HTTP method, always `POST` for the Data Collector API.
    pub method: String,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Resource path, `/api/logs`.
    pub resource: String,
    /// RFC 1123 date, the same value sent in `x-ms-date`.
    pub date: String,
    /// Body length in bytes, as decimal string.
    pub content_length: String,
}

impl SigningContext {
    /// Build the context for posting a body of `content_length` bytes at `date`.
    pub fn new(date: impl Into<String>, content_length: usize) -> Self {
        Self {
            method: METHOD.to_string(),
            content_type: CONTENT_TYPE.to_string(),
            resource: RESOURCE.to_string(),
            date: date.into(),
            content_length: content_length.to_string(),
        }
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// Content-Length + "\n" +
    /// Content-Type + "\n" +
    /// "x-ms-date:" + Date + "\n" +
    /// Resource
    /// ```
    ///
    /// ## Reference
    ///
    /// - [Authorization header](https://learn.microsoft.com/en-us/azure/azure-monitor/logs/data-collector-api#authorization)
    pub fn string_to_sign(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}:{}\n{}",
            self.method,
            self.content_length,
            self.content_type,
            X_MS_DATE,
            self.date,
            self.resource
        )
    }
}

/// Build the `Authorization` header value for the Data Collector API.
///
/// Returns `SharedKey {customer_id}:{signature}` where signature is the base64
/// encoded HMAC-SHA256 of [`SigningContext::string_to_sign`] keyed by the
/// decoded `shared_key`.
///
/// Fails with [`ErrorKind::ConfigInvalid`](logship_core::ErrorKind::ConfigInvalid)
/// if `shared_key` is not valid base64.
pub fn build_signature(
    customer_id: &str,
    shared_key: &str,
    ctx: &SigningContext,
) -> Result<String> {
    let string_to_sign = ctx.string_to_sign();
    debug!("string to sign: {}", &string_to_sign);

    let key = base64_decode(shared_key)
        .map_err(|e| Error::config_invalid("failed to decode shared key").with_source(e))?;
    let signature = base64_hmac_sha256(&key, string_to_sign.as_bytes());

    Ok(format!("SharedKey {customer_id}:{signature}"))
}
