//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FlowStore` - session-local persistence of flow state
//! - `InterestNotifier` - fire-and-forget program interest submission

mod flow_store;
mod interest_notifier;

pub use flow_store::{FlowStore, FlowStoreError};
pub use interest_notifier::{InterestNotifier, ProgramInterest};
