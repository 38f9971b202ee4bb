//! ResetFlowHandler - Command handler for restarting a flow.

use std::sync::Arc;

use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::{map_store_error, FlowView};

/// Command to reset a flow to its initial state.
#[derive(Debug, Clone)]
pub struct ResetFlowCommand {
    pub flow_id: FlowId,
}

/// Handler for resetting flows.
pub struct ResetFlowHandler {
    store: Arc<dyn FlowStore>,
}

impl ResetFlowHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ResetFlowCommand) -> Result<FlowView, FlowError> {
        let mut flow = self
            .store
            .load(cmd.flow_id)
            .await
            .map_err(map_store_error)?;
        flow.reset();
        self.store
            .save(cmd.flow_id, &flow)
            .await
            .map_err(map_store_error)?;
        Ok(FlowView::from_flow(cmd.flow_id, &flow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowStore;
    use crate::domain::eligibility::{Answer, EligibilityFlow};

    #[tokio::test]
    async fn reset_returns_flow_to_root_question() {
        let store = Arc::new(InMemoryFlowStore::new());
        let flow_id = FlowId::new();

        let mut flow = EligibilityFlow::new();
        flow.record_answer("persona", Answer::single("sme"));
        flow.advance();
        flow.record_answer("smeSector", Answer::multi(["creative"]));
        store.save(flow_id, &flow).await.unwrap();

        let handler = ResetFlowHandler::new(store.clone());
        let view = handler.handle(ResetFlowCommand { flow_id }).await.unwrap();

        assert!(view.persona.is_none());
        assert_eq!(view.current_question.map(|q| q.id), Some("persona"));
        assert!(store.load(flow_id).await.unwrap().answers().is_empty());
    }

    #[tokio::test]
    async fn missing_flow_yields_not_found() {
        let handler = ResetFlowHandler::new(Arc::new(InMemoryFlowStore::new()));
        let flow_id = FlowId::new();
        let err = handler
            .handle(ResetFlowCommand { flow_id })
            .await
            .unwrap_err();
        assert_eq!(err, FlowError::NotFound(flow_id));
    }
}
