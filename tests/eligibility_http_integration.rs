//! Integration tests for eligibility HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring for the flow operations:
//! 1. Request DTOs deserialize correctly
//! 2. Response DTOs serialize correctly
//! 3. Handlers can be created and wired together

use serde_json::json;
use std::sync::Arc;

use program_pathfinder::adapters::http::eligibility::{
    FlowStateResponse, ProgramListResponse, RecommendationResponse, RegisterInterestRequest,
    SubmitAnswerRequest,
};
use program_pathfinder::adapters::http::EligibilityHandlers;
use program_pathfinder::adapters::storage::InMemoryFlowStore;
use program_pathfinder::application::handlers::eligibility::{
    AdvanceFlowHandler, GetFlowHandler, GetRecommendationHandler, GoBackHandler,
    RegisterInterestHandler, ResetFlowHandler, StartFlowHandler, SubmitAnswerHandler,
};
use program_pathfinder::domain::eligibility::{program_rules, Answer};
use program_pathfinder::ports::{InterestNotifier, ProgramInterest};

use async_trait::async_trait;
use std::sync::Mutex;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Mock interest notifier for testing
struct MockInterestNotifier {
    received: Mutex<Vec<ProgramInterest>>,
}

impl MockInterestNotifier {
    fn new() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl InterestNotifier for MockInterestNotifier {
    async fn notify(&self, interest: ProgramInterest) {
        self.received.lock().unwrap().push(interest);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_handler_wiring() {
    // Verify all handlers can be created and wired together
    let store: Arc<dyn program_pathfinder::ports::FlowStore> =
        Arc::new(InMemoryFlowStore::new());
    let notifier = Arc::new(MockInterestNotifier::new());

    let start_handler = Arc::new(StartFlowHandler::new(store.clone()));
    let get_handler = Arc::new(GetFlowHandler::new(store.clone()));
    let submit_handler = Arc::new(SubmitAnswerHandler::new(store.clone()));
    let advance_handler = Arc::new(AdvanceFlowHandler::new(store.clone()));
    let go_back_handler = Arc::new(GoBackHandler::new(store.clone()));
    let reset_handler = Arc::new(ResetFlowHandler::new(store.clone()));
    let recommendation_handler = Arc::new(GetRecommendationHandler::new(store.clone()));
    let interest_handler = Arc::new(RegisterInterestHandler::new(store, notifier));

    let _handlers = EligibilityHandlers::new(
        start_handler,
        get_handler,
        submit_handler,
        advance_handler,
        go_back_handler,
        reset_handler,
        recommendation_handler,
        interest_handler,
    );

    // If we get here, the wiring is correct
}

#[test]
fn test_submit_answer_request_deserializes() {
    // Verify single-select request DTO deserializes correctly
    let json = json!({
        "question_id": "persona",
        "value": "founder"
    });

    let json_str = serde_json::to_string(&json).unwrap();
    let req: SubmitAnswerRequest = serde_json::from_str(&json_str).unwrap();

    assert_eq!(req.question_id, "persona");
    assert_eq!(req.value, Answer::single("founder"));
}

#[test]
fn test_submit_answer_request_deserializes_multi_select() {
    let json = json!({
        "question_id": "smeSector",
        "value": ["creative", "sustainability"]
    });

    let json_str = serde_json::to_string(&json).unwrap();
    let req: SubmitAnswerRequest = serde_json::from_str(&json_str).unwrap();

    assert_eq!(
        req.value,
        Answer::multi(["creative", "sustainability"])
    );
}

#[test]
fn test_register_interest_request_deserializes() {
    // Name is optional and may be omitted entirely
    let json = json!({
        "program_id": "s3-incubator",
        "email": "founder@example.com"
    });

    let json_str = serde_json::to_string(&json).unwrap();
    let req: RegisterInterestRequest = serde_json::from_str(&json_str).unwrap();

    assert_eq!(req.program_id, "s3-incubator");
    assert_eq!(req.email, "founder@example.com");
    assert!(req.name.is_none());
}

#[tokio::test]
async fn test_flow_state_response_serializes() {
    // Verify response DTO serializes correctly from a freshly started flow
    let store: Arc<dyn program_pathfinder::ports::FlowStore> =
        Arc::new(InMemoryFlowStore::new());
    let handler = StartFlowHandler::new(store);
    let result = handler.handle().await.unwrap();

    let response: FlowStateResponse = result.view.into();
    let json = serde_json::to_value(&response).unwrap();

    assert!(json["flow_id"].is_string());
    assert_eq!(json["question"]["id"], "persona");
    assert_eq!(json["question"]["mode"], "single");
    assert_eq!(json["complete"], false);
    assert_eq!(json["progress"]["answered"], 0);
    // Persona is omitted until chosen
    assert!(json.get("persona").is_none());
}

#[test]
fn test_recommendation_response_serializes_match() {
    let rule = &program_rules()[0];
    let response = RecommendationResponse::matched(rule);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["program"]["id"], rule.id);
    assert_eq!(json["program"]["title"], rule.title);
    assert!(json.get("fallback").is_none());
}

#[test]
fn test_recommendation_response_serializes_fallback() {
    let response = RecommendationResponse::fallback();
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("program").is_none());
    assert_eq!(json["fallback"], RecommendationResponse::FALLBACK_MESSAGE);
}

#[test]
fn test_program_list_response_serializes_all_programs() {
    let response = ProgramListResponse {
        items: program_rules().iter().map(Into::into).collect(),
    };
    let json = serde_json::to_value(&response).unwrap();

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), program_rules().len());
    assert_eq!(items[0]["id"], program_rules()[0].id);
    assert!(items.iter().all(|item| item["link"].is_string()));
}

#[tokio::test]
async fn test_register_interest_reaches_notifier() {
    let store = Arc::new(InMemoryFlowStore::new());
    let notifier = Arc::new(MockInterestNotifier::new());

    let start = StartFlowHandler::new(store.clone());
    let flow_id = start.handle().await.unwrap().view.flow_id;

    let handler = RegisterInterestHandler::new(store, notifier.clone());
    handler
        .handle(
            program_pathfinder::application::handlers::eligibility::RegisterInterestCommand {
                flow_id,
                program_id: "startup-dojo".to_string(),
                email: "student@example.com".to_string(),
                name: Some("Amal".to_string()),
            },
        )
        .await
        .unwrap();

    let received = notifier.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].program_id, "startup-dojo");
    assert_eq!(received[0].flow_id, flow_id);
}
