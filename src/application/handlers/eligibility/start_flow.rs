//! StartFlowHandler - Command handler for opening a new flow session.

use std::sync::Arc;

use crate::domain::eligibility::EligibilityFlow;
use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::{map_store_error, FlowView};

/// Result of starting a flow: the id plus the initial view (the root
/// persona question).
#[derive(Debug, Clone)]
pub struct StartFlowResult {
    pub view: FlowView,
}

/// Handler for starting flows.
pub struct StartFlowHandler {
    store: Arc<dyn FlowStore>,
}

impl StartFlowHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<StartFlowResult, FlowError> {
        let flow_id = FlowId::new();
        let flow = EligibilityFlow::new();
        self.store
            .save(flow_id, &flow)
            .await
            .map_err(map_store_error)?;
        Ok(StartFlowResult {
            view: FlowView::from_flow(flow_id, &flow),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowStore;
    use crate::ports::FlowStoreError;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl FlowStore for FailingStore {
        async fn save(
            &self,
            _flow_id: FlowId,
            _flow: &EligibilityFlow,
        ) -> Result<(), FlowStoreError> {
            Err(FlowStoreError::Backend("save failed".to_string()))
        }

        async fn load(&self, flow_id: FlowId) -> Result<EligibilityFlow, FlowStoreError> {
            Err(FlowStoreError::NotFound(flow_id))
        }

        async fn exists(&self, _flow_id: FlowId) -> Result<bool, FlowStoreError> {
            Ok(false)
        }

        async fn delete(&self, _flow_id: FlowId) -> Result<(), FlowStoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn starts_a_flow_at_the_root_question() {
        let store = Arc::new(InMemoryFlowStore::new());
        let handler = StartFlowHandler::new(store.clone());

        let result = handler.handle().await.unwrap();
        assert_eq!(result.view.current_question.map(|q| q.id), Some("persona"));
        assert!(store.exists(result.view.flow_id).await.unwrap());
    }

    #[tokio::test]
    async fn each_start_gets_a_distinct_id() {
        let handler = StartFlowHandler::new(Arc::new(InMemoryFlowStore::new()));
        let a = handler.handle().await.unwrap();
        let b = handler.handle().await.unwrap();
        assert_ne!(a.view.flow_id, b.view.flow_id);
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_storage_error() {
        let handler = StartFlowHandler::new(Arc::new(FailingStore));
        let err = handler.handle().await.unwrap_err();
        assert!(matches!(err, FlowError::Storage(_)));
    }
}
