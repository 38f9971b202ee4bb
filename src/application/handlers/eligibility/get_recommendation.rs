//! GetRecommendationHandler - Query handler for the program recommendation.

use std::sync::Arc;

use crate::domain::eligibility::{program_rules, recommend, ProgramRule};
use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::map_store_error;

/// Query for a flow's recommendation.
#[derive(Debug, Clone)]
pub struct GetRecommendationQuery {
    pub flow_id: FlowId,
}

/// The matcher outcome for a flow.
///
/// `None` is a valid, handled result: the caller presents a generic
/// "talk to our team" fallback instead of a program.
#[derive(Debug, Clone)]
pub struct RecommendationResult {
    pub program: Option<&'static ProgramRule>,
}

/// Handler for computing recommendations.
pub struct GetRecommendationHandler {
    store: Arc<dyn FlowStore>,
}

impl GetRecommendationHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    /// Evaluates the static rule table against the flow's answers.
    ///
    /// Pure over the stored answers: repeated calls on an unchanged flow
    /// always return the same program.
    pub async fn handle(
        &self,
        query: GetRecommendationQuery,
    ) -> Result<RecommendationResult, FlowError> {
        let flow = self
            .store
            .load(query.flow_id)
            .await
            .map_err(map_store_error)?;
        let program = recommend(flow.answers(), program_rules());
        Ok(RecommendationResult { program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowStore;
    use crate::domain::eligibility::{Answer, EligibilityFlow};

    async fn stored_flow(answers: &[(&str, &str)]) -> (Arc<InMemoryFlowStore>, FlowId) {
        let store = Arc::new(InMemoryFlowStore::new());
        let flow_id = FlowId::new();
        let mut flow = EligibilityFlow::new();
        for (question, value) in answers {
            flow.record_answer(*question, Answer::single(*value));
        }
        store.save(flow_id, &flow).await.unwrap();
        (store, flow_id)
    }

    #[tokio::test]
    async fn recommends_for_a_complete_student_flow() {
        let (store, flow_id) = stored_flow(&[
            ("persona", "student"),
            ("studentStage", "concept"),
            ("studentUniversity", "yes"),
        ])
        .await;

        let handler = GetRecommendationHandler::new(store);
        let result = handler
            .handle(GetRecommendationQuery { flow_id })
            .await
            .unwrap();
        assert_eq!(result.program.map(|p| p.id), Some("startup-dojo"));
    }

    #[tokio::test]
    async fn repeated_calls_return_the_same_program() {
        let (store, flow_id) = stored_flow(&[
            ("persona", "global"),
            ("globalMarket", "yes"),
            ("globalExpansion", "yes"),
        ])
        .await;

        let handler = GetRecommendationHandler::new(store);
        let first = handler
            .handle(GetRecommendationQuery { flow_id })
            .await
            .unwrap();
        let second = handler
            .handle(GetRecommendationQuery { flow_id })
            .await
            .unwrap();
        assert_eq!(
            first.program.map(|p| p.id),
            second.program.map(|p| p.id)
        );
    }

    #[tokio::test]
    async fn unmatched_answers_yield_empty_result() {
        let (store, flow_id) = stored_flow(&[
            ("persona", "founder"),
            ("founderStage", "idea"),
            ("founderTech", "no"),
            ("founderLocation", "no"),
        ])
        .await;

        let handler = GetRecommendationHandler::new(store);
        let result = handler
            .handle(GetRecommendationQuery { flow_id })
            .await
            .unwrap();
        assert!(result.program.is_none());
    }
}
