//! Static question catalog.
//!
//! The questionnaire is declared as literal data, not conditional code: the
//! table order is the presentation order, and every dependency points at a
//! question that appears earlier in the flow (the root persona question),
//! so no cycles can form.
//!
//! All dependency filtering goes through [`eligible_questions`]. The flow
//! controller and the progress counter both call it, so the progress bar can
//! never disagree with the questions actually presented.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Answer, AnswerSet, DependsOn, Persona, Question, QuestionOption, SelectMode};

/// Question id of the root persona-selection question.
pub const PERSONA_QUESTION_ID: &str = "persona";

static PERSONA_OPTIONS: [QuestionOption; 4] = [
    QuestionOption::with_persona("student", "I'm a student with an idea", Persona::Student),
    QuestionOption::with_persona("founder", "I'm building a startup", Persona::Founder),
    QuestionOption::with_persona("sme", "I run an established business", Persona::Sme),
    QuestionOption::with_persona("global", "I'm expanding from abroad", Persona::Global),
];

static PERSONA_QUESTION: Question = Question {
    id: PERSONA_QUESTION_ID,
    prompt: "Which of these best describes you?",
    options: &PERSONA_OPTIONS,
    mode: SelectMode::Single,
    depends_on: None,
};

static YES_NO: [QuestionOption; 2] = [
    QuestionOption::new("yes", "Yes"),
    QuestionOption::new("no", "No"),
];

static STUDENT_STAGE_OPTIONS: [QuestionOption; 3] = [
    QuestionOption::new("concept", "It's still a concept"),
    QuestionOption::new("prototype", "I have a prototype"),
    QuestionOption::new("launched", "I've already launched"),
];

static FOUNDER_STAGE_OPTIONS: [QuestionOption; 3] = [
    QuestionOption::new("idea", "Idea stage"),
    QuestionOption::new("mvp", "MVP with early users"),
    QuestionOption::new("scaling", "Revenue and scaling"),
];

static SME_SECTOR_OPTIONS: [QuestionOption; 5] = [
    QuestionOption::new("manufacturing", "Manufacturing"),
    QuestionOption::new("creative", "Creative industries"),
    QuestionOption::new("sustainability", "Sustainability"),
    QuestionOption::new("edtech", "Education technology"),
    QuestionOption::new("other", "Other"),
];

static SME_SUPPORT_OPTIONS: [QuestionOption; 3] = [
    QuestionOption::new("funding", "Access to funding"),
    QuestionOption::new("advisory", "Advisory and mentorship"),
    QuestionOption::new("network", "Network and partnerships"),
];

static GLOBAL_EXPANSION_OPTIONS: [QuestionOption; 3] = [
    QuestionOption::new("yes", "Yes, within the year"),
    QuestionOption::new("maybe", "Exploring the option"),
    QuestionOption::new("no", "Not at the moment"),
];

/// The persona-dependent questions, in presentation order.
///
/// The root persona question is kept separate ([`persona_question`]); it is
/// always presented first and is never part of the filtered list.
static QUESTIONS: [Question; 9] = [
    Question {
        id: "studentStage",
        prompt: "Where is your idea today?",
        options: &STUDENT_STAGE_OPTIONS,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "student")),
    },
    Question {
        id: "studentUniversity",
        prompt: "Are you enrolled at, or a recent graduate of, a UAE university?",
        options: &YES_NO,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "student")),
    },
    Question {
        id: "founderStage",
        prompt: "What stage is your startup at?",
        options: &FOUNDER_STAGE_OPTIONS,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "founder")),
    },
    Question {
        id: "founderTech",
        prompt: "Is your product technology-driven?",
        options: &YES_NO,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "founder")),
    },
    Question {
        id: "founderLocation",
        prompt: "Are you based in Sharjah, or willing to relocate?",
        options: &YES_NO,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "founder")),
    },
    Question {
        id: "smeSector",
        prompt: "Which sectors does your business operate in?",
        options: &SME_SECTOR_OPTIONS,
        mode: SelectMode::Multi,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "sme")),
    },
    Question {
        id: "smeSupport",
        prompt: "What kind of support are you looking for?",
        options: &SME_SUPPORT_OPTIONS,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "sme")),
    },
    Question {
        id: "globalMarket",
        prompt: "Do you have a product live in your home market?",
        options: &YES_NO,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "global")),
    },
    Question {
        id: "globalExpansion",
        prompt: "Are you ready to expand into the UAE market?",
        options: &GLOBAL_EXPANSION_OPTIONS,
        mode: SelectMode::Single,
        depends_on: Some(DependsOn::new(PERSONA_QUESTION_ID, "global")),
    },
];

static QUESTION_INDEX: Lazy<HashMap<&'static str, &'static Question>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, &'static Question> = HashMap::new();
    index.insert(PERSONA_QUESTION.id, &PERSONA_QUESTION);
    for question in QUESTIONS.iter() {
        index.insert(question.id, question);
    }
    index
});

/// Returns the root persona-selection question.
pub fn persona_question() -> &'static Question {
    &PERSONA_QUESTION
}

/// Returns the persona-dependent questions in declared order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Looks up any question (root included) by id.
pub fn question_by_id(id: &str) -> Option<&'static Question> {
    QUESTION_INDEX.get(id).copied()
}

/// The shared dependency filter.
///
/// Returns the questions whose `depends_on` is satisfied by the given
/// answers, preserving table order. A pure function of the answers and the
/// static table; both `EligibilityFlow::current_question` and the progress
/// total are computed through here.
pub fn eligible_questions(answers: &AnswerSet) -> Vec<&'static Question> {
    QUESTIONS
        .iter()
        .filter(|q| match q.depends_on {
            None => true,
            Some(dep) => answers
                .get(dep.question_id)
                .map(|a| answer_matches(a, dep.answer_id))
                .unwrap_or(false),
        })
        .collect()
}

/// Count of questions satisfiable under the given persona.
///
/// Used for progress display; computed with the same filter as
/// [`eligible_questions`], seeded with only the persona answer.
pub fn total_for_persona(persona: Persona) -> usize {
    let mut answers = AnswerSet::new();
    answers.upsert(PERSONA_QUESTION_ID, Answer::single(persona.as_str()));
    eligible_questions(&answers).len()
}

fn answer_matches(answer: &Answer, expected: &str) -> bool {
    match answer {
        Answer::Single(value) => value == expected,
        Answer::Multi(values) => values.iter().any(|v| v == expected),
    }
}
