//! AdvanceFlowHandler - Command handler for the "Next" action.

use std::sync::Arc;

use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::{map_store_error, FlowView};

/// Command to advance a flow to the next question.
#[derive(Debug, Clone)]
pub struct AdvanceFlowCommand {
    pub flow_id: FlowId,
}

/// Handler for the Next action.
pub struct AdvanceFlowHandler {
    store: Arc<dyn FlowStore>,
}

impl AdvanceFlowHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    /// Advances the flow and returns the refreshed view.
    ///
    /// Advancing an unanswered question is a silent no-op: the returned
    /// view simply shows the same question again.
    pub async fn handle(&self, cmd: AdvanceFlowCommand) -> Result<FlowView, FlowError> {
        let mut flow = self
            .store
            .load(cmd.flow_id)
            .await
            .map_err(map_store_error)?;
        flow.advance();
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
    use crate::domain::eligibility::{Answer, EligibilityFlow, Persona};

    async fn handler_with_flow() -> (AdvanceFlowHandler, Arc<InMemoryFlowStore>, FlowId) {
        let store = Arc::new(InMemoryFlowStore::new());
        let flow_id = FlowId::new();
        store.save(flow_id, &EligibilityFlow::new()).await.unwrap();
        (AdvanceFlowHandler::new(store.clone()), store, flow_id)
    }

    #[tokio::test]
    async fn advancing_answered_root_question_derives_persona() {
        let (handler, store, flow_id) = handler_with_flow().await;

        let mut flow = store.load(flow_id).await.unwrap();
        flow.record_answer("persona", Answer::single("global"));
        store.save(flow_id, &flow).await.unwrap();

        let view = handler.handle(AdvanceFlowCommand { flow_id }).await.unwrap();
        assert_eq!(view.persona, Some(Persona::Global));
        assert_eq!(view.current_question.map(|q| q.id), Some("globalMarket"));
    }

    #[tokio::test]
    async fn advancing_unanswered_question_is_a_no_op() {
        let (handler, _store, flow_id) = handler_with_flow().await;

        let view = handler.handle(AdvanceFlowCommand { flow_id }).await.unwrap();
        assert!(view.persona.is_none());
        assert_eq!(view.current_question.map(|q| q.id), Some("persona"));
    }

    #[tokio::test]
    async fn missing_flow_yields_not_found() {
        let handler = AdvanceFlowHandler::new(Arc::new(InMemoryFlowStore::new()));
        let flow_id = FlowId::new();
        let err = handler
            .handle(AdvanceFlowCommand { flow_id })
            .await
            .unwrap_err();
        assert_eq!(err, FlowError::NotFound(flow_id));
    }
}
