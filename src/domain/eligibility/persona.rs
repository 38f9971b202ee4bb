//! Applicant persona classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level applicant category, chosen via the root question.
///
/// The persona determines which subsequent questions apply. It is derived
/// exactly once, from the `persona` tag on the chosen root-question option,
/// and stays fixed unless the user backtracks to the root question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// University student or recent graduate with an early idea.
    Student,
    /// Founder building a startup in the home market.
    Founder,
    /// Established small or medium enterprise.
    Sme,
    /// International startup looking at market entry.
    Global,
}

impl Persona {
    /// All personas, in root-question option order.
    pub const ALL: [Persona; 4] = [
        Persona::Student,
        Persona::Founder,
        Persona::Sme,
        Persona::Global,
    ];

    /// Returns the stable string form used in tables and over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Student => "student",
            Persona::Founder => "founder",
            Persona::Sme => "sme",
            Persona::Global => "global",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Persona::Student),
            "founder" => Ok(Persona::Founder),
            "sme" => Ok(Persona::Sme),
            "global" => Ok(Persona::Global),
            other => Err(format!("Unknown persona: {}", other)),
        }
    }
}
