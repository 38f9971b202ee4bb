//! Eligibility questionnaire domain.
//!
//! Two cooperating pieces:
//!
//! - the **question flow controller** ([`EligibilityFlow`]) walks an ordered,
//!   persona-branching set of questions, tracking the current position,
//!   collected answers, and derived persona;
//! - the **recommendation matcher** ([`recommend`]) evaluates the collected
//!   answers against the static program rule table and returns the earliest
//!   fully-matching program (first-wins ordering).
//!
//! Data flows one direction: answers accumulate in an [`AnswerSet`], the
//! persona is derived from the root question's answer, subsequent questions
//! are filtered by persona and prior answers, and once the sequence is
//! exhausted the answers are handed to the matcher.

mod answer;
mod catalog;
mod flow;
mod matcher;
mod persona;
mod programs;
mod question;

pub use answer::{Answer, AnswerSet};
pub use catalog::{
    eligible_questions, persona_question, question_by_id, questions, total_for_persona,
    PERSONA_QUESTION_ID,
};
pub use flow::{EligibilityFlow, FlowProgress};
pub use matcher::{recommend, Criterion, ProgramRule};
pub use persona::Persona;
pub use programs::{program_by_id, program_rules};
pub use question::{DependsOn, Question, QuestionOption, SelectMode};
