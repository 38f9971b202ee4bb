//! Adapters - Implementations of ports for concrete infrastructure.

pub mod crm;
pub mod http;
pub mod storage;
