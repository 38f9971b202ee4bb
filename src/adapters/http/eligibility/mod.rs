//! HTTP adapter for the eligibility flow endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, FlowStateResponse, ProgramListResponse, ProgramResponse, ProgressResponse,
    QuestionResponse, RecommendationResponse, RegisterInterestRequest, SubmitAnswerRequest,
};
pub use handlers::{list_programs, EligibilityHandlers};
pub use routes::eligibility_routes;
