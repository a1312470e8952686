use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Age-group persona driving which savings tips are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Student,
    Professional,
    Senior,
}

const STUDENT_TIPS: &[&str] = &[
    "Start a 3-month emergency fund",
    "Use student discounts whenever possible",
    "Try part-time gigs/freelancing to learn income skills",
    "Avoid credit card balances and high-interest EMIs",
    "Begin investing small, consistently",
];

const PROFESSIONAL_TIPS: &[&str] = &[
    "Target 20%+ savings rate",
    "Max your employer retirement match",
    "Diversify across assets (equity, debt, gold)",
    "Review insurance coverage annually",
    "Set time-bound financial goals",
];

const SENIOR_TIPS: &[&str] = &[
    "Prioritize capital preservation",
    "Consider downsizing to reduce fixed costs",
    "Plan sustainable withdrawal strategies",
    "Track healthcare and medicines in budget",
    "Use available senior benefits",
];

impl Persona {
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Persona::Student => STUDENT_TIPS,
            Persona::Professional => PROFESSIONAL_TIPS,
            Persona::Senior => SENIOR_TIPS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Persona::Student => "Student",
            Persona::Professional => "Professional",
            Persona::Senior => "Senior",
        }
    }
}

/// Tips for an optional persona; nothing when no persona is chosen
pub fn tips_for(persona: Option<Persona>) -> &'static [&'static str] {
    match persona {
        Some(persona) => persona.tips(),
        None => &[],
    }
}
