//! Race-weekend stages and the free-text stage classifier.

use std::sync::LazyLock;

use regex::Regex;

/// A phase of the race weekend.
///
/// The set is closed: three free-practice sessions, three qualifying
/// segments, and the Grand Prix itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    #[default]
    Fp1,
    Fp2,
    Fp3,
    Q1,
    Q2,
    Q3,
    Race,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Fp1,
        Stage::Fp2,
        Stage::Fp3,
        Stage::Q1,
        Stage::Q2,
        Stage::Q3,
        Stage::Race,
    ];

    /// Canonical display string, e.g. `"Free Practice 2"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Stage::Fp1 => "Free Practice 1",
            Stage::Fp2 => "Free Practice 2",
            Stage::Fp3 => "Free Practice 3",
            Stage::Q1 => "Qualifying 1",
            Stage::Q2 => "Qualifying 2",
            Stage::Q3 => "Qualifying 3",
            Stage::Race => "The Grand Prix (Race)",
        }
    }

    /// Short abbreviation used in hashtags, e.g. `"FP2"` or `"Race"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Stage::Fp1 => "FP1",
            Stage::Fp2 => "FP2",
            Stage::Fp3 => "FP3",
            Stage::Q1 => "Q1",
            Stage::Q2 => "Q2",
            Stage::Q3 => "Q3",
            Stage::Race => "Race",
        }
    }

    /// Identifier shown in the interactive prompt (`FP1`, `Q3`, `RACE`).
    pub fn name(self) -> &'static str {
        match self {
            Stage::Race => "RACE",
            other => other.abbreviation(),
        }
    }

    /// Session number within practice or qualifying. `None` for the race.
    pub fn session_number(self) -> Option<u8> {
        match self {
            Stage::Fp1 | Stage::Q1 => Some(1),
            Stage::Fp2 | Stage::Q2 => Some(2),
            Stage::Fp3 | Stage::Q3 => Some(3),
            Stage::Race => None,
        }
    }

    pub fn is_practice(self) -> bool {
        matches!(self, Stage::Fp1 | Stage::Fp2 | Stage::Fp3)
    }

    pub fn is_qualifying(self) -> bool {
        matches!(self, Stage::Q1 | Stage::Q2 | Stage::Q3)
    }

    fn practice(n: u8) -> Option<Stage> {
        match n {
            1 => Some(Stage::Fp1),
            2 => Some(Stage::Fp2),
            3 => Some(Stage::Fp3),
            _ => None,
        }
    }

    fn qualifying(n: u8) -> Option<Stage> {
        match n {
            1 => Some(Stage::Q1),
            2 => Some(Stage::Q2),
            3 => Some(Stage::Q3),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// Order matters: the first exact match wins, and the unnumbered aliases
// ("fp", "q") resolve to the last session of their kind.
const STAGE_ALIASES: &[(&str, Stage)] = &[
    ("fp1", Stage::Fp1),
    ("free practice 1", Stage::Fp1),
    ("practice 1", Stage::Fp1),
    ("fp2", Stage::Fp2),
    ("free practice 2", Stage::Fp2),
    ("practice 2", Stage::Fp2),
    ("fp3", Stage::Fp3),
    ("free practice 3", Stage::Fp3),
    ("practice 3", Stage::Fp3),
    ("fp", Stage::Fp3),
    ("practice", Stage::Fp3),
    ("free practice", Stage::Fp3),
    ("q1", Stage::Q1),
    ("qualifying 1", Stage::Q1),
    ("q2", Stage::Q2),
    ("qualifying 2", Stage::Q2),
    ("q3", Stage::Q3),
    ("qualifying 3", Stage::Q3),
    ("q", Stage::Q3),
    ("qualifying", Stage::Q3),
    ("quali", Stage::Q3),
    ("race", Stage::Race),
    ("grand prix", Stage::Race),
    ("gp", Stage::Race),
];

static NUMBERED_PRACTICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:fp|free practice|practice)\s*([1-3])$").expect("valid practice pattern")
});

static NUMBERED_QUALIFYING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:q|qualifying|quali)\s*([1-3])$").expect("valid qualifying pattern")
});

/// Map free-text input onto a [`Stage`].
///
/// Exact aliases are tried first, then the numbered forms
/// (`"practice2"`, `"quali 1"`, ...). Returns `None` when nothing matches;
/// callers keep their current stage in that case.
pub fn parse_stage(input: &str) -> Option<Stage> {
    let normalized = input.trim().to_lowercase();

    if let Some((_, stage)) = STAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
    {
        return Some(*stage);
    }

    if let Some(n) = session_digit(&NUMBERED_PRACTICE, &normalized) {
        return Stage::practice(n);
    }
    if let Some(n) = session_digit(&NUMBERED_QUALIFYING, &normalized) {
        return Stage::qualifying(n);
    }

    None
}

fn session_digit(pattern: &Regex, input: &str) -> Option<u8> {
    pattern
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
