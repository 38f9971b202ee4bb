//! HTTP CRM Notifier Adapter
//!
//! Posts interest registrations to the configured contact endpoint as JSON.
//! Delivery runs on a spawned task with bounded retries; outcomes are
//! reported through logs only, keeping the questionnaire path synchronous
//! and failure-free.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::ports::{InterestNotifier, ProgramInterest};

const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Notifier that delivers interest registrations over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInterestNotifier {
    client: Client,
    endpoint: String,
}

impl HttpInterestNotifier {
    /// Create a notifier for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn deliver(client: Client, endpoint: String, interest: ProgramInterest) {
        for attempt in 1..=MAX_ATTEMPTS {
            match client.post(&endpoint).json(&interest).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(
                        flow_id = %interest.flow_id,
                        program_id = %interest.program_id,
                        "interest delivered to CRM"
                    );
                    return;
                }
                Ok(response) => {
                    warn!(
                        flow_id = %interest.flow_id,
                        status = %response.status(),
                        attempt,
                        "CRM rejected interest submission"
                    );
                }
                Err(e) => {
                    warn!(
                        flow_id = %interest.flow_id,
                        error = %e,
                        attempt,
                        "CRM delivery failed"
                    );
                }
            }
            if attempt < MAX_ATTEMPTS {
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
        warn!(
            flow_id = %interest.flow_id,
            program_id = %interest.program_id,
            "giving up on CRM delivery after {} attempts",
            MAX_ATTEMPTS
        );
    }
}

#[async_trait]
impl InterestNotifier for HttpInterestNotifier {
    async fn notify(&self, interest: ProgramInterest) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(Self::deliver(client, endpoint, interest));
    }
}
