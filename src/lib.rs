//! Program Pathfinder - Eligibility Questionnaire & Program Recommendation
//!
//! This crate implements the applicant-facing eligibility flow for an
//! entrepreneurship support platform: a persona-branching questionnaire
//! whose collected answers are matched against a static, ordered table of
//! program rules to produce a recommendation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
