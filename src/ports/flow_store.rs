//! Flow Store Port - Interface for keeping flow state between requests.
//!
//! Flow state lives for one applicant session only. The contract makes no
//! promise of durability: an implementation may hold everything in memory
//! and discard it on shutdown.

use async_trait::async_trait;

use crate::domain::eligibility::EligibilityFlow;
use crate::domain::foundation::FlowId;

/// Errors that can occur during flow store operations
#[derive(Debug, thiserror::Error)]
pub enum FlowStoreError {
    #[error("Flow not found: {0}")]
    NotFound(FlowId),

    #[error("Storage error: {0}")]
    Backend(String),
}

/// Port for persisting and loading flow state
#[async_trait]
pub trait FlowStore: Send + Sync {
    /// Save flow state under the given id, inserting or replacing.
    ///
    /// # Errors
    /// Returns `FlowStoreError::Backend` if the save fails
    async fn save(&self, flow_id: FlowId, flow: &EligibilityFlow) -> Result<(), FlowStoreError>;

    /// Load flow state.
    ///
    /// # Errors
    /// Returns `FlowStoreError::NotFound` if no flow exists for the id
    async fn load(&self, flow_id: FlowId) -> Result<EligibilityFlow, FlowStoreError>;

    /// Check whether a flow exists.
    async fn exists(&self, flow_id: FlowId) -> Result<bool, FlowStoreError>;

    /// Delete a flow's state.
    async fn delete(&self, flow_id: FlowId) -> Result<(), FlowStoreError>;
}
