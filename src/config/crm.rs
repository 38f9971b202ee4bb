//! CRM delivery configuration

use super::error::ValidationError;
use serde::Deserialize;

/// Configuration for forwarding program interest to an external CRM
///
/// When `endpoint` is unset, interest registrations are logged locally
/// instead of being delivered over HTTP.
#[derive(Debug, Clone, Deserialize)]
pub struct CrmConfig {
    /// Webhook URL interest payloads are POSTed to
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds for CRM delivery
    #[serde(default = "default_delivery_timeout")]
    pub delivery_timeout_secs: u64,
}

fn default_delivery_timeout() -> u64 {
    10
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            delivery_timeout_secs: default_delivery_timeout(),
        }
    }
}

impl CrmConfig {
    /// Validate CRM configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the endpoint is set but not an http(s)
    /// URL, or the delivery timeout is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidUrl {
                    field: "crm.endpoint".to_string(),
                    message: "must start with http:// or https://".to_string(),
                });
            }
        }

        if self.delivery_timeout_secs == 0 || self.delivery_timeout_secs > 60 {
            return Err(ValidationError::InvalidTimeout {
                field: "crm.delivery_timeout_secs".to_string(),
                value: self.delivery_timeout_secs,
                max: 60,
            });
        }

        Ok(())
    }
}
