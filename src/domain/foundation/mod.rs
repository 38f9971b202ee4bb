//! Shared domain primitives.

mod errors;
mod ids;
mod timestamp;

pub use errors::{FlowError, FlowErrorCode};
pub use ids::FlowId;
pub use timestamp::Timestamp;
