//! HTTP DTOs for the eligibility endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::eligibility::FlowView;
use crate::domain::eligibility::{Answer, FlowProgress, ProgramRule, Question, SelectMode};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record an answer.
///
/// `value` is either a single option id or an array of option ids for
/// multi-select questions; [`Answer`] deserializes both shapes untagged.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub question_id: String,
    pub value: Answer,
}

/// Request to register interest in a program.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInterestRequest {
    pub program_id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One selectable option on a question.
#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub id: &'static str,
    pub label: &'static str,
}

/// A question as presented to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: &'static str,
    pub prompt: &'static str,
    pub mode: SelectMode,
    pub options: Vec<OptionResponse>,
}

impl From<&'static Question> for QuestionResponse {
    fn from(question: &'static Question) -> Self {
        Self {
            id: question.id,
            prompt: question.prompt,
            mode: question.mode,
            options: question
                .options
                .iter()
                .map(|o| OptionResponse {
                    id: o.id,
                    label: o.label,
                })
                .collect(),
        }
    }
}

/// Progress-bar counts.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub answered: usize,
    pub total: usize,
}

impl From<FlowProgress> for ProgressResponse {
    fn from(progress: FlowProgress) -> Self {
        Self {
            answered: progress.answered,
            total: progress.total,
        }
    }
}

/// The state of a flow after any operation.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStateResponse {
    pub flow_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponse>,
    pub progress: ProgressResponse,
    pub complete: bool,
}

impl From<FlowView> for FlowStateResponse {
    fn from(view: FlowView) -> Self {
        Self {
            flow_id: view.flow_id.to_string(),
            persona: view.persona.map(|p| p.to_string()),
            question: view.current_question.map(Into::into),
            progress: view.progress.into(),
            complete: view.complete,
        }
    }
}

/// A program's display fields.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramResponse {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

impl From<&'static ProgramRule> for ProgramResponse {
    fn from(rule: &'static ProgramRule) -> Self {
        Self {
            id: rule.id,
            title: rule.title,
            description: rule.description,
            link: rule.link,
        }
    }
}

/// The recommendation outcome.
///
/// A flow with no matching program gets `program: null` plus a fallback
/// message; this is a handled outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<ProgramResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<&'static str>,
}

impl RecommendationResponse {
    pub const FALLBACK_MESSAGE: &'static str =
        "We couldn't find a single best fit. Reach out to our team and we'll point you right.";

    pub fn matched(rule: &'static ProgramRule) -> Self {
        Self {
            program: Some(rule.into()),
            fallback: None,
        }
    }

    pub fn fallback() -> Self {
        Self {
            program: None,
            fallback: Some(Self::FALLBACK_MESSAGE),
        }
    }
}

/// The program catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramListResponse {
    pub items: Vec<ProgramResponse>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}
