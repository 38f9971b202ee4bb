//! Storage adapters for flow state.

mod in_memory_flow_store;

pub use in_memory_flow_store::InMemoryFlowStore;
