//! HTTP routes for the eligibility flow endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    advance_flow, get_flow, get_recommendation, go_back, register_interest, reset_flow,
    start_flow, submit_answer, EligibilityHandlers,
};

/// Creates the flow router with all endpoints.
pub fn eligibility_routes(handlers: EligibilityHandlers) -> Router {
    Router::new()
        .route("/", post(start_flow))
        .route("/:id", get(get_flow))
        .route("/:id/answer", post(submit_answer))
        .route("/:id/advance", post(advance_flow))
        .route("/:id/back", post(go_back))
        .route("/:id/reset", post(reset_flow))
        .route("/:id/recommendation", get(get_recommendation))
        .route("/:id/interest", post(register_interest))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFlowStore;
    use crate::application::handlers::eligibility::{
        AdvanceFlowHandler, GetFlowHandler, GetRecommendationHandler, GoBackHandler,
        RegisterInterestHandler, ResetFlowHandler, StartFlowHandler, SubmitAnswerHandler,
    };
    use crate::ports::{FlowStore, InterestNotifier, ProgramInterest};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct NoopNotifier;

    #[async_trait]
    impl InterestNotifier for NoopNotifier {
        async fn notify(&self, _interest: ProgramInterest) {}
    }

    fn test_router() -> Router {
        let store: Arc<dyn FlowStore> = Arc::new(InMemoryFlowStore::new());
        let handlers = EligibilityHandlers::new(
            Arc::new(StartFlowHandler::new(store.clone())),
            Arc::new(GetFlowHandler::new(store.clone())),
            Arc::new(SubmitAnswerHandler::new(store.clone())),
            Arc::new(AdvanceFlowHandler::new(store.clone())),
            Arc::new(GoBackHandler::new(store.clone())),
            Arc::new(ResetFlowHandler::new(store.clone())),
            Arc::new(GetRecommendationHandler::new(store.clone())),
            Arc::new(RegisterInterestHandler::new(store, Arc::new(NoopNotifier))),
        );
        eligibility_routes(handlers)
    }

    #[tokio::test]
    async fn starting_a_flow_returns_created() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn unknown_flow_returns_not_found() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/00000000-0000-0000-0000-000000000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_flow_id_returns_bad_request() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
