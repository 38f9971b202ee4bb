//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `eligibility` - Question flow controller, answer model, and the
//!   program recommendation matcher with its static tables

pub mod eligibility;
pub mod foundation;
