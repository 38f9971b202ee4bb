//! Interest Notifier Port - fire-and-forget submission of program interest.
//!
//! The final "I'm interested in this program" submission goes to a remote
//! contact endpoint. Delivery is decoupled from the flow and the matcher:
//! implementations handle their own retries and report failures through
//! logs, never back into the questionnaire.

use async_trait::async_trait;

use crate::domain::foundation::FlowId;

/// The payload sent when an applicant registers interest in a program.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProgramInterest {
    pub flow_id: FlowId,
    pub program_id: String,
    pub email: String,
    pub name: Option<String>,
}

/// Port for delivering interest registrations to the outside world.
#[async_trait]
pub trait InterestNotifier: Send + Sync {
    /// Dispatch an interest registration.
    ///
    /// Fire-and-forget: implementations must not block the caller on
    /// delivery outcome, and must never propagate delivery failures.
    async fn notify(&self, interest: ProgramInterest);
}
