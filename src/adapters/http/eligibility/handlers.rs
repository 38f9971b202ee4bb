//! HTTP handlers for the eligibility flow endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::eligibility::{
    AdvanceFlowCommand, AdvanceFlowHandler, GetFlowHandler, GetFlowQuery,
    GetRecommendationHandler, GetRecommendationQuery, GoBackCommand, GoBackHandler,
    RegisterInterestCommand, RegisterInterestHandler, ResetFlowCommand, ResetFlowHandler,
    StartFlowHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::eligibility::program_rules;
use crate::domain::foundation::{FlowError, FlowId};

use super::dto::{
    ErrorResponse, FlowStateResponse, ProgramListResponse, RecommendationResponse,
    RegisterInterestRequest, SubmitAnswerRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct EligibilityHandlers {
    start_handler: Arc<StartFlowHandler>,
    get_handler: Arc<GetFlowHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    advance_handler: Arc<AdvanceFlowHandler>,
    go_back_handler: Arc<GoBackHandler>,
    reset_handler: Arc<ResetFlowHandler>,
    recommendation_handler: Arc<GetRecommendationHandler>,
    interest_handler: Arc<RegisterInterestHandler>,
}

impl EligibilityHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_handler: Arc<StartFlowHandler>,
        get_handler: Arc<GetFlowHandler>,
        submit_handler: Arc<SubmitAnswerHandler>,
        advance_handler: Arc<AdvanceFlowHandler>,
        go_back_handler: Arc<GoBackHandler>,
        reset_handler: Arc<ResetFlowHandler>,
        recommendation_handler: Arc<GetRecommendationHandler>,
        interest_handler: Arc<RegisterInterestHandler>,
    ) -> Self {
        Self {
            start_handler,
            get_handler,
            submit_handler,
            advance_handler,
            go_back_handler,
            reset_handler,
            recommendation_handler,
            interest_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/flows - Start a new eligibility flow
pub async fn start_flow(State(handlers): State<EligibilityHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(result) => {
            let response: FlowStateResponse = result.view.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// GET /api/flows/:id - Current flow state
pub async fn get_flow(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    match handlers.get_handler.handle(GetFlowQuery { flow_id }).await {
        Ok(view) => {
            let response: FlowStateResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/flows/:id/answer - Record an answer
pub async fn submit_answer(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    let cmd = SubmitAnswerCommand {
        flow_id,
        question_id: req.question_id,
        answer: req.value,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(view) => {
            let response: FlowStateResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/flows/:id/advance - The Next action
pub async fn advance_flow(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    match handlers
        .advance_handler
        .handle(AdvanceFlowCommand { flow_id })
        .await
    {
        Ok(view) => {
            let response: FlowStateResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/flows/:id/back - The Back action
pub async fn go_back(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    match handlers
        .go_back_handler
        .handle(GoBackCommand { flow_id })
        .await
    {
        Ok(view) => {
            let response: FlowStateResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/flows/:id/reset - Restart the flow
pub async fn reset_flow(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    match handlers
        .reset_handler
        .handle(ResetFlowCommand { flow_id })
        .await
    {
        Ok(view) => {
            let response: FlowStateResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// GET /api/flows/:id/recommendation - The matched program or fallback
pub async fn get_recommendation(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    match handlers
        .recommendation_handler
        .handle(GetRecommendationQuery { flow_id })
        .await
    {
        Ok(result) => {
            let response = match result.program {
                Some(rule) => RecommendationResponse::matched(rule),
                None => RecommendationResponse::fallback(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_flow_error(e),
    }
}

/// POST /api/flows/:id/interest - Register interest in a program
pub async fn register_interest(
    State(handlers): State<EligibilityHandlers>,
    Path(flow_id): Path<String>,
    Json(req): Json<RegisterInterestRequest>,
) -> Response {
    let Some(flow_id) = parse_flow_id(&flow_id) else {
        return invalid_flow_id();
    };

    let cmd = RegisterInterestCommand {
        flow_id,
        program_id: req.program_id,
        email: req.email,
        name: req.name,
    };

    match handlers.interest_handler.handle(cmd).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => handle_flow_error(e),
    }
}

/// GET /api/programs - The program catalog
pub async fn list_programs() -> Response {
    let response = ProgramListResponse {
        items: program_rules().iter().map(Into::into).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_flow_id(raw: &str) -> Option<FlowId> {
    raw.parse::<FlowId>().ok()
}

fn invalid_flow_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid flow ID")),
    )
        .into_response()
}

fn handle_flow_error(error: FlowError) -> Response {
    let status = match &error {
        FlowError::NotFound(_) => StatusCode::NOT_FOUND,
        FlowError::UnknownQuestion(_) | FlowError::UnknownProgram(_) => StatusCode::NOT_FOUND,
        FlowError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        FlowError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorResponse::new(error.code().to_string(), error.to_string());
    (status, Json(body)).into_response()
}
