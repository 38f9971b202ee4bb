//! EligibilityFlow aggregate - one applicant's walk through the questionnaire.
//!
//! # Invariants
//!
//! - `persona` is `None` until the root question has been answered and
//!   advanced past, and stays fixed until the user backtracks to the root
//! - `step` indexes into the dependency-filtered question list, which is a
//!   pure function of the answers and the static catalog
//! - backtracking past persona selection prunes the answer set down to the
//!   persona answer; nothing from an abandoned persona path survives
//!
//! All state is session-local and in-memory. Transitions are synchronous
//! and atomic per call; there is nothing to flush or persist beyond what
//! the owning store chooses to keep for the session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{catalog, Answer, AnswerSet, Persona, Question};

/// Progress snapshot for the questionnaire progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowProgress {
    /// Questions answered so far on the current persona path (the root
    /// persona question is not counted).
    pub answered: usize,
    /// Total questions on the current persona path.
    pub total: usize,
}

/// The question flow controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityFlow {
    step: usize,
    answers: AnswerSet,
    persona: Option<Persona>,
    result_shown: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl EligibilityFlow {
    /// Creates a fresh flow positioned at the root persona question.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            step: 0,
            answers: AnswerSet::new(),
            persona: None,
            result_shown: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn persona(&self) -> Option<Persona> {
        self.persona
    }

    /// True once the flow has advanced past the last question.
    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// The question currently presented, or `None` when the flow is
    /// terminal and the result screen should be shown.
    ///
    /// While the persona is unset this is always the root question,
    /// regardless of `step`. Afterwards it is the question at `step` in the
    /// dependency-filtered list.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.persona.is_none() {
            return Some(catalog::persona_question());
        }
        if self.result_shown {
            return None;
        }
        catalog::eligible_questions(&self.answers)
            .get(self.step)
            .copied()
    }

    /// Progress for display. Meaningful once a persona is chosen; before
    /// that both counts are zero.
    pub fn progress(&self) -> FlowProgress {
        match self.persona {
            None => FlowProgress {
                answered: 0,
                total: 0,
            },
            Some(persona) => {
                let answered = catalog::eligible_questions(&self.answers)
                    .iter()
                    .filter(|q| self.answers.has_answer(q.id))
                    .count();
                FlowProgress {
                    answered,
                    total: catalog::total_for_persona(persona),
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Records or replaces an answer. Trusted caller: option ids are not
    /// validated against the catalog at this layer.
    pub fn record_answer(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.upsert(question_id, answer);
        self.touch();
    }

    /// The "Next" action.
    ///
    /// A no-op when the current question has no non-empty answer (the UI is
    /// expected to disable the control, so this is a guard, not a fault).
    /// Answering the root question derives the persona and restarts the
    /// step counter without discarding the persona answer itself.
    pub fn advance(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        if !self.answers.has_answer(question.id) {
            return;
        }

        if self.persona.is_none() {
            self.persona = self.derived_persona();
            // Unknown persona tag on the chosen option: stay on the root
            // question rather than entering an undefined path.
            if self.persona.is_some() {
                self.step = 0;
            }
            self.touch();
            return;
        }

        let remaining = catalog::eligible_questions(&self.answers).len();
        if self.step + 1 < remaining {
            self.step += 1;
        } else {
            self.result_shown = true;
        }
        self.touch();
    }

    /// The "Back" action.
    ///
    /// Leaving the result screen clears the terminal flag. Backtracking
    /// past the first persona-path question clears the persona and prunes
    /// every answer except the persona selection.
    pub fn go_back(&mut self) {
        if self.result_shown {
            self.result_shown = false;
            self.touch();
            return;
        }
        if self.step > 0 {
            self.step -= 1;
            self.touch();
        } else if self.persona.is_some() {
            self.persona = None;
            self.step = 0;
            self.answers.retain_only(catalog::PERSONA_QUESTION_ID);
            self.touch();
        }
    }

    /// Returns the flow to its initial state.
    pub fn reset(&mut self) {
        self.step = 0;
        self.answers.clear();
        self.persona = None;
        self.result_shown = false;
        self.touch();
    }

    fn derived_persona(&self) -> Option<Persona> {
        let answer = self.answers.get(catalog::PERSONA_QUESTION_ID)?;
        let Answer::Single(option_id) = answer else {
            return None;
        };
        catalog::persona_question()
            .option(option_id)
            .and_then(|o| o.persona)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for EligibilityFlow {
    fn default() -> Self {
        Self::new()
    }
}
