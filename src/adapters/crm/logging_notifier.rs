//! Logging Interest Notifier
//!
//! Stub notifier for development and testing: records the registration in
//! the logs and delivers nowhere. Used whenever no CRM endpoint is
//! configured.

use async_trait::async_trait;
use tracing::info;

use crate::ports::{InterestNotifier, ProgramInterest};

/// Notifier that only logs interest registrations.
#[derive(Debug, Clone, Default)]
pub struct LoggingInterestNotifier;

impl LoggingInterestNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InterestNotifier for LoggingInterestNotifier {
    async fn notify(&self, interest: ProgramInterest) {
        info!(
            flow_id = %interest.flow_id,
            program_id = %interest.program_id,
            email = %interest.email,
            "interest registered (no CRM endpoint configured)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FlowId;

    #[tokio::test]
    async fn notify_completes_without_delivery() {
        let notifier = LoggingInterestNotifier::new();
        notifier
            .notify(ProgramInterest {
                flow_id: FlowId::new(),
                program_id: "community-membership".to_string(),
                email: "someone@example.com".to_string(),
                name: None,
            })
            .await;
    }
}
