//! RegisterInterestHandler - Command handler for program interest submission.

use std::sync::Arc;

use crate::domain::eligibility::program_by_id;
use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::{FlowStore, InterestNotifier, ProgramInterest};

use super::map_store_error;

/// Command to register interest in a program.
#[derive(Debug, Clone)]
pub struct RegisterInterestCommand {
    pub flow_id: FlowId,
    pub program_id: String,
    pub email: String,
    pub name: Option<String>,
}

/// Handler for interest registrations.
///
/// Delivery is fire-and-forget through the notifier port; a failing CRM
/// never fails this command.
pub struct RegisterInterestHandler {
    store: Arc<dyn FlowStore>,
    notifier: Arc<dyn InterestNotifier>,
}

impl RegisterInterestHandler {
    pub fn new(store: Arc<dyn FlowStore>, notifier: Arc<dyn InterestNotifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn handle(&self, cmd: RegisterInterestCommand) -> Result<(), FlowError> {
        if cmd.email.trim().is_empty() || !cmd.email.contains('@') {
            return Err(FlowError::validation("email", "must be a valid address"));
        }
        if program_by_id(&cmd.program_id).is_none() {
            return Err(FlowError::unknown_program(cmd.program_id));
        }
        if !self
            .store
            .exists(cmd.flow_id)
            .await
            .map_err(map_store_error)?
        {
            return Err(FlowError::not_found(cmd.flow_id));
        }

        self.notifier
            .notify(ProgramInterest {
                flow_id: cmd.flow_id,
                program_id: cmd.program_id,
                email: cmd.email,
                name: cmd.name,
            })
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowStore;
    use crate::domain::eligibility::EligibilityFlow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<ProgramInterest>>,
    }

    #[async_trait]
    impl InterestNotifier for RecordingNotifier {
        async fn notify(&self, interest: ProgramInterest) {
            self.sent.lock().unwrap().push(interest);
        }
    }

    async fn setup() -> (Arc<InMemoryFlowStore>, Arc<RecordingNotifier>, FlowId) {
        let store = Arc::new(InMemoryFlowStore::new());
        let flow_id = FlowId::new();
        store.save(flow_id, &EligibilityFlow::new()).await.unwrap();
        (store, Arc::new(RecordingNotifier::default()), flow_id)
    }

    fn command(flow_id: FlowId) -> RegisterInterestCommand {
        RegisterInterestCommand {
            flow_id,
            program_id: "s3-incubator".to_string(),
            email: "founder@example.com".to_string(),
            name: Some("Amal".to_string()),
        }
    }

    #[tokio::test]
    async fn dispatches_interest_to_the_notifier() {
        let (store, notifier, flow_id) = setup().await;
        let handler = RegisterInterestHandler::new(store, notifier.clone());

        handler.handle(command(flow_id)).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].program_id, "s3-incubator");
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let (store, notifier, flow_id) = setup().await;
        let handler = RegisterInterestHandler::new(store, notifier.clone());

        let mut cmd = command(flow_id);
        cmd.email = "not-an-email".to_string();
        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, FlowError::ValidationFailed { .. }));
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_program() {
        let (store, notifier, flow_id) = setup().await;
        let handler = RegisterInterestHandler::new(store, notifier);

        let mut cmd = command(flow_id);
        cmd.program_id = "moon-landing".to_string();
        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err, FlowError::unknown_program("moon-landing".to_string()));
    }

    #[tokio::test]
    async fn rejects_unknown_flow() {
        let (_store, notifier, _flow_id) = setup().await;
        let handler =
            RegisterInterestHandler::new(Arc::new(InMemoryFlowStore::new()), notifier);

        let missing = FlowId::new();
        let err = handler.handle(command(missing)).await.unwrap_err();
        assert_eq!(err, FlowError::not_found(missing));
    }
}
