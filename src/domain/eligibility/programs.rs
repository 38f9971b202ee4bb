//! Static program rule table.
//!
//! Declared as literal data so the eligibility criteria stay auditable in
//! one place. The declaration order IS the priority ranking: the matcher
//! returns the first fully-matching rule, so more specific programs must be
//! listed before the catch-all community membership.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Criterion, ProgramRule};

static PROGRAM_RULES: [ProgramRule; 6] = [
    ProgramRule {
        id: "startup-dojo",
        title: "Startup Dojo",
        description: "An intensive summer incubation program for university \
                      students validating their first idea.",
        link: "/programs/startup-dojo",
        criteria: &[
            ("persona", Criterion::OneOf(&["student"])),
            ("studentStage", Criterion::OneOf(&["concept", "prototype"])),
            ("studentUniversity", Criterion::OneOf(&["yes"])),
        ],
    },
    ProgramRule {
        id: "startup-dojo-plus",
        title: "Startup Dojo+",
        description: "A follow-on track for student teams that have already \
                      launched and want to push toward incorporation.",
        link: "/programs/startup-dojo-plus",
        criteria: &[
            ("persona", Criterion::OneOf(&["student"])),
            ("studentStage", Criterion::OneOf(&["launched"])),
        ],
    },
    ProgramRule {
        id: "s3-incubator",
        title: "S3 Incubator",
        description: "A six-month incubator for tech-driven startups with a \
                      working product, offering funding without equity.",
        link: "/programs/s3-incubator",
        criteria: &[
            ("persona", Criterion::OneOf(&["founder"])),
            ("founderStage", Criterion::OneOf(&["mvp", "scaling"])),
            ("founderTech", Criterion::OneOf(&["yes"])),
            ("founderLocation", Criterion::OneOf(&["yes"])),
        ],
    },
    ProgramRule {
        id: "access-sharjah",
        title: "Access Sharjah Challenge",
        description: "A market-entry challenge connecting international \
                      startups with local pilot customers.",
        link: "/programs/access-sharjah",
        criteria: &[
            ("persona", Criterion::OneOf(&["global"])),
            ("globalMarket", Criterion::OneOf(&["yes"])),
            ("globalExpansion", Criterion::OneOf(&["yes", "maybe"])),
        ],
    },
    ProgramRule {
        id: "sme-support",
        title: "SME Support",
        description: "Growth support for established businesses in priority \
                      sectors: advisory, financing access, and procurement.",
        link: "/programs/sme-support",
        criteria: &[
            ("persona", Criterion::OneOf(&["sme"])),
            (
                "smeSector",
                Criterion::OneOf(&["manufacturing", "creative", "sustainability", "edtech", "other"]),
            ),
        ],
    },
    ProgramRule {
        id: "community-membership",
        title: "Community Membership",
        description: "Open membership with events, workspace access, and the \
                      founder network, for anyone on the journey.",
        link: "/programs/community",
        criteria: &[
            (
                "persona",
                Criterion::OneOf(&["student", "founder", "sme", "global"]),
            ),
            ("founderLocation", Criterion::OneOfOrAbsent(&["yes"])),
        ],
    },
];

static PROGRAM_INDEX: Lazy<HashMap<&'static str, &'static ProgramRule>> =
    Lazy::new(|| PROGRAM_RULES.iter().map(|rule| (rule.id, rule)).collect());

/// Returns the program rules in priority order.
pub fn program_rules() -> &'static [ProgramRule] {
    &PROGRAM_RULES
}

/// Looks up a program rule by id.
pub fn program_by_id(id: &str) -> Option<&'static ProgramRule> {
    PROGRAM_INDEX.get(id).copied()
}
