//! Question and option value objects.

use serde::Serialize;

use super::Persona;

/// Whether a question accepts one option or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    Single,
    Multi,
}

/// A selectable choice on a question.
///
/// The `persona` tag appears only on the root question's options; it is how
/// the flow derives the applicant's persona from the first answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
    pub persona: Option<Persona>,
}

impl QuestionOption {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            persona: None,
        }
    }

    pub const fn with_persona(id: &'static str, label: &'static str, persona: Persona) -> Self {
        Self {
            id,
            label,
            persona: Some(persona),
        }
    }
}

/// A presentation dependency on an earlier question's answer.
///
/// Invariant (upheld by the static catalog): the target question appears
/// earlier in the flow than the dependent question, so no cycles can form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependsOn {
    pub question_id: &'static str,
    pub answer_id: &'static str,
}

impl DependsOn {
    pub const fn new(question_id: &'static str, answer_id: &'static str) -> Self {
        Self {
            question_id,
            answer_id,
        }
    }
}

/// One prompt in the eligibility flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
    pub mode: SelectMode,
    pub depends_on: Option<DependsOn>,
}

impl Question {
    /// Looks up an option by id.
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Returns true if this question accepts multiple selections.
    pub fn is_multi(&self) -> bool {
        self.mode == SelectMode::Multi
    }
}
