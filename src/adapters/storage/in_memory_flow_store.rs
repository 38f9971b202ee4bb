//! In-Memory Flow Store Adapter
//!
//! Keeps every flow in process memory. This is the production store: flow
//! state is session-local by design and nothing survives a restart. An
//! optional idle TTL lets a long-lived process evict abandoned flows.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::eligibility::EligibilityFlow;
use crate::domain::foundation::{FlowId, Timestamp};
use crate::ports::{FlowStore, FlowStoreError};

/// In-memory storage for eligibility flows
#[derive(Debug, Clone)]
pub struct InMemoryFlowStore {
    flows: Arc<RwLock<HashMap<FlowId, EligibilityFlow>>>,
    idle_ttl: Option<Duration>,
}

impl InMemoryFlowStore {
    /// Create a store that keeps flows until deleted.
    pub fn new() -> Self {
        Self {
            flows: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl: None,
        }
    }

    /// Create a store that evicts flows idle for longer than `ttl_secs`.
    pub fn with_idle_ttl(ttl_secs: u64) -> Self {
        Self {
            flows: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl: Some(Duration::seconds(ttl_secs as i64)),
        }
    }

    /// Number of flows currently held.
    pub async fn flow_count(&self) -> usize {
        self.flows.read().await.len()
    }

    /// Clear all stored flows (useful for tests)
    pub async fn clear(&self) {
        self.flows.write().await.clear();
    }

    /// Evict flows whose last update is older than the idle TTL.
    ///
    /// Returns the number of evicted flows. A no-op when no TTL is set.
    pub async fn sweep_idle(&self) -> usize {
        let Some(ttl) = self.idle_ttl else {
            return 0;
        };
        let cutoff = Timestamp::now().minus_seconds(ttl.num_seconds());
        let mut flows = self.flows.write().await;
        let before = flows.len();
        flows.retain(|_, flow| !flow.updated_at().is_before(&cutoff));
        let evicted = before - flows.len();
        if evicted > 0 {
            debug!(evicted, "swept idle flows");
        }
        evicted
    }
}

impl Default for InMemoryFlowStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlowStore for InMemoryFlowStore {
    async fn save(&self, flow_id: FlowId, flow: &EligibilityFlow) -> Result<(), FlowStoreError> {
        let mut flows = self.flows.write().await;
        flows.insert(flow_id, flow.clone());
        Ok(())
    }

    async fn load(&self, flow_id: FlowId) -> Result<EligibilityFlow, FlowStoreError> {
        let flows = self.flows.read().await;
        flows
            .get(&flow_id)
            .cloned()
            .ok_or(FlowStoreError::NotFound(flow_id))
    }

    async fn exists(&self, flow_id: FlowId) -> Result<bool, FlowStoreError> {
        let flows = self.flows.read().await;
        Ok(flows.contains_key(&flow_id))
    }

    async fn delete(&self, flow_id: FlowId) -> Result<(), FlowStoreError> {
        self.flows.write().await.remove(&flow_id);
        Ok(())
    }
}
