//! Handlers for the eligibility flow operations.
//!
//! Each handler owns its port dependencies behind `Arc<dyn ...>` and maps
//! store failures into domain errors at this boundary.

mod advance_flow;
mod get_flow;
mod get_recommendation;
mod go_back;
mod register_interest;
mod reset_flow;
mod start_flow;
mod submit_answer;

pub use advance_flow::{AdvanceFlowCommand, AdvanceFlowHandler};
pub use get_flow::{FlowView, GetFlowHandler, GetFlowQuery};
pub use get_recommendation::{
    GetRecommendationHandler, GetRecommendationQuery, RecommendationResult,
};
pub use go_back::{GoBackCommand, GoBackHandler};
pub use register_interest::{RegisterInterestCommand, RegisterInterestHandler};
pub use reset_flow::{ResetFlowCommand, ResetFlowHandler};
pub use start_flow::{StartFlowHandler, StartFlowResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler};

use crate::domain::foundation::FlowError;
use crate::ports::FlowStoreError;

pub(crate) fn map_store_error(error: FlowStoreError) -> FlowError {
    match error {
        FlowStoreError::NotFound(id) => FlowError::NotFound(id),
        FlowStoreError::Backend(message) => FlowError::Storage(message),
    }
}
