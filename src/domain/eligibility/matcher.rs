//! Program recommendation matcher.
//!
//! Evaluates the collected answers against the static program rule table.
//! A rule fully matches when every one of its criteria dimensions is
//! satisfied; the earliest fully-matching rule in table order wins. No match
//! is a valid empty result, presented by the caller as a generic fallback.

use tracing::warn;

use super::{Answer, AnswerSet};

/// One acceptance condition on a single answer dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// The answer must be present and among the listed option ids.
    /// Multi-select answers match when any selected value is listed.
    OneOf(&'static [&'static str]),
    /// Like `OneOf`, but an absent answer also satisfies the criterion
    /// (the dimension is optional for this rule).
    OneOfOrAbsent(&'static [&'static str]),
}

impl Criterion {
    fn acceptable_values(&self) -> &'static [&'static str] {
        match self {
            Criterion::OneOf(values) | Criterion::OneOfOrAbsent(values) => values,
        }
    }

    fn allows_absent(&self) -> bool {
        matches!(self, Criterion::OneOfOrAbsent(_))
    }
}

/// A static entry describing one offered program.
///
/// `title`, `description`, and `link` are opaque display fields. The
/// behaviorally significant part is `criteria`: dimension key (a question
/// id) paired with the criterion the recorded answer must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub criteria: &'static [(&'static str, Criterion)],
}

impl ProgramRule {
    /// Returns true if every criterion dimension is satisfied by the answers.
    ///
    /// A rule with zero criteria never matches; otherwise it would silently
    /// match every applicant.
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        if self.criteria.is_empty() {
            return false;
        }
        self.criteria
            .iter()
            .all(|(dimension, criterion)| dimension_matches(self.id, dimension, criterion, answers))
    }
}

/// Returns the first rule in table order that fully matches the answers.
///
/// Pure and referentially transparent: identical answers and rules always
/// yield the identical recommendation. Cheap enough to recompute on demand,
/// so no caching sits in front of it.
pub fn recommend<'r>(answers: &AnswerSet, rules: &'r [ProgramRule]) -> Option<&'r ProgramRule> {
    rules.iter().find(|rule| rule.matches(answers))
}

fn dimension_matches(
    rule_id: &str,
    dimension: &str,
    criterion: &Criterion,
    answers: &AnswerSet,
) -> bool {
    let acceptable = criterion.acceptable_values();
    match answers.get(dimension) {
        None => criterion.allows_absent(),
        Some(Answer::Single(value)) => acceptable.contains(&value.as_str()),
        Some(Answer::Multi(values)) => {
            if values.is_empty() {
                // An empty selection should have been rejected upstream;
                // skip the dimension as non-matching and keep evaluating
                // the remaining rules.
                warn!(rule = rule_id, dimension, "empty multi-select answer while matching");
                return false;
            }
            values.iter().any(|v| acceptable.contains(&v.as_str()))
        }
    }
}
