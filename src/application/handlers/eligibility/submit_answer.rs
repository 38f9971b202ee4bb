//! SubmitAnswerHandler - Command handler for recording an answer.

use std::sync::Arc;

use crate::domain::eligibility::{question_by_id, Answer};
use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::{map_store_error, FlowView};

/// Command to record an answer on a flow.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub flow_id: FlowId,
    pub question_id: String,
    pub answer: Answer,
}

/// Handler for recording answers.
pub struct SubmitAnswerHandler {
    store: Arc<dyn FlowStore>,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    /// Upserts the answer and returns the refreshed view.
    ///
    /// The question id must exist in the catalog; option ids are not
    /// validated (the flow controller is a trusted caller of the answer
    /// set, and unknown option ids simply never match any rule).
    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<FlowView, FlowError> {
        if question_by_id(&cmd.question_id).is_none() {
            return Err(FlowError::unknown_question(cmd.question_id));
        }

        let mut flow = self
            .store
            .load(cmd.flow_id)
            .await
            .map_err(map_store_error)?;
        flow.record_answer(cmd.question_id, cmd.answer);
        self.store
            .save(cmd.flow_id, &flow)
            .await
            .map_err(map_store_error)?;
        Ok(FlowView::from_flow(cmd.flow_id, &flow))
    }
}
