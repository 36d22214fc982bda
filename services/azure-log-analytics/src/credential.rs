use logship_core::hash::base64_decode;
use logship_core::utils::Redact;
use logship_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// Credential that holds the workspace id and its shared key.
#[derive(Default, Clone)]
pub struct Credential {
    /// Log Analytics workspace id.
    pub customer_id: String,
    /// Base64 encoded workspace key.
    pub shared_key: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("customer_id", &self.customer_id)
            .field("shared_key", &Redact::from(&self.shared_key))
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    pub fn new(customer_id: impl Into<String>, shared_key: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            shared_key: shared_key.into(),
        }
    }

    /// Check if the credential is usable for signing.
    ///
    /// Both fields must be present and the shared key must be valid base64.
    pub fn check(&self) -> Result<()> {
        if self.customer_id.is_empty() {
            return Err(Error::config_invalid("customer_id is required"));
        }
        if self.shared_key.is_empty() {
            return Err(Error::config_invalid("shared_key is required"));
        }
        base64_decode(&self.shared_key).map_err(|e| {
            Error::config_invalid("shared_key is not valid base64").with_source(e)
        })?;
        Ok(())
    }
}
