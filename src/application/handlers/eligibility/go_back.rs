//! GoBackHandler - Command handler for the "Back" action.

use std::sync::Arc;

use crate::domain::foundation::{FlowError, FlowId};
use crate::ports::FlowStore;

use super::{map_store_error, FlowView};

/// Command to step a flow backwards.
#[derive(Debug, Clone)]
pub struct GoBackCommand {
    pub flow_id: FlowId,
}

/// Handler for the Back action.
pub struct GoBackHandler {
    store: Arc<dyn FlowStore>,
}

impl GoBackHandler {
    pub fn new(store: Arc<dyn FlowStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: GoBackCommand) -> Result<FlowView, FlowError> {
        let mut flow = self
            .store
            .load(cmd.flow_id)
            .await
            .map_err(map_store_error)?;
        flow.go_back();
        self.store
            .save(cmd.flow_id, &flow)
            .await
            .map_err(map_store_error)?;
        Ok(FlowView::from_flow(cmd.flow_id, &flow))
    }
}
