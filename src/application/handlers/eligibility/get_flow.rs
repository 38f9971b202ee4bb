//! GetFlowHandler - Query handler for reading flow state.

use std::sync::Arc;

use crate::domain::eligibility::{EligibilityFlow, FlowProgress, Persona, Question};
use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::map_store_error;

/// Query for the current state of a flow.
#[derive(Debug, Clone)]
pub struct GetFlowQuery {
    pub flow_id: FlowId,
}

/// Snapshot of a flow as presented to the UI layer.
#[derive(Debug, Clone)]
pub struct FlowView {
    pub flow_id: FlowId,
    pub persona: Option<Persona>,
    pub current_question: Option<&'static Question>,
    pub progress: FlowProgress,
    /// True when the question sequence is exhausted and the result screen
    /// should be shown.
    pub complete: bool,
}

impl FlowView {
    pub(crate) fn from_flow(flow_id: FlowId, flow: &EligibilityFlow) -> Self {
        Self {
            flow_id,
            persona: flow.persona(),
            current_question: flow.current_question(),
            progress: flow.progress(),
            complete: flow.result_shown(),
        }
    }
}

/// Handler for reading flow state.
pub struct GetFlowHandler {
    store: Arc<dyn FlowStore>,
}

impl GetFlowHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetFlowQuery) -> Result<FlowView, FlowError> {
        let flow = self
            .store
            .load(query.flow_id)
            .await
            .map_err(map_store_error)?;
        Ok(FlowView::from_flow(query.flow_id, &flow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowStore;

    #[tokio::test]
    async fn returns_view_of_fresh_flow() {
        let store = Arc::new(InMemoryFlowStore::new());
        let flow_id = FlowId::new();
        store.save(flow_id, &EligibilityFlow::new()).await.unwrap();

        let handler = GetFlowHandler::new(store);
        let view = handler.handle(GetFlowQuery { flow_id }).await.unwrap();

        assert_eq!(view.flow_id, flow_id);
        assert!(view.persona.is_none());
        assert_eq!(view.current_question.map(|q| q.id), Some("persona"));
        assert!(!view.complete);
    }

    #[tokio::test]
    async fn missing_flow_yields_not_found() {
        let handler = GetFlowHandler::new(Arc::new(InMemoryFlowStore::new()));
        let flow_id = FlowId::new();
        let err = handler.handle(GetFlowQuery { flow_id }).await.unwrap_err();
        assert_eq!(err, FlowError::NotFound(flow_id));
    }
}
