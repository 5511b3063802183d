//! Race results and the free-text result classifier.

use std::sync::LazyLock;

use regex::Regex;

/// A classified finishing position, always within `1..=20`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 20;

    /// Build a position, rejecting anything outside the grid.
    pub fn new(place: u32) -> Option<Self> {
        if (Self::FIRST as u32..=Self::LAST as u32).contains(&place) {
            Some(Self(place as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// How a session or race ended for the racer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RaceResult {
    /// A classified position, P1 through P20.
    Finished(Position),
    /// Did not finish.
    Dnf,
    /// Somewhere on the podium, exact place unknown.
    Top3,
    /// Somewhere in the top five, exact place unknown.
    Top5,
}

/// The broad outcome a result falls into. Drives template selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    GoodResult,
    Dnf,
    DifficultRace,
}

impl Outcome {
    /// Category-key suffix, e.g. `"_good_result"`.
    pub fn suffix(self) -> &'static str {
        match self {
            Outcome::Win => "_win",
            Outcome::GoodResult => "_good_result",
            Outcome::Dnf => "_dnf",
            Outcome::DifficultRace => "_difficult_race",
        }
    }
}

impl RaceResult {
    /// Shorthand for `Finished(Position::new(place)?)`.
    pub fn position(place: u32) -> Option<Self> {
        Position::new(place).map(RaceResult::Finished)
    }

    /// Canonical display string: `"P7"`, `"DNF"`, `"Top 3"`, `"Top 5"`.
    pub fn display_name(self) -> String {
        match self {
            RaceResult::Finished(p) => format!("P{}", p.get()),
            RaceResult::Dnf => "DNF".to_string(),
            RaceResult::Top3 => "Top 3".to_string(),
            RaceResult::Top5 => "Top 5".to_string(),
        }
    }

    pub fn is_win(self) -> bool {
        self.outcome() == Outcome::Win
    }

    pub fn outcome(self) -> Outcome {
        match self {
            RaceResult::Finished(p) if p.get() == 1 => Outcome::Win,
            RaceResult::Finished(p) if p.get() <= 5 => Outcome::GoodResult,
            RaceResult::Top3 | RaceResult::Top5 => Outcome::GoodResult,
            RaceResult::Dnf => Outcome::Dnf,
            RaceResult::Finished(_) => Outcome::DifficultRace,
        }
    }
}

impl std::fmt::Display for RaceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

static EXACT_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p(\d+)$").expect("valid position pattern"));

static POSITION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bp(\d+)\b").expect("valid position token pattern"));

/// Map free-text input onto a [`RaceResult`].
///
/// Rules are applied in order and the first hit wins: DNF phrasing, an exact
/// `p<n>` within the grid, win/pole jargon, podium talk (optionally with a
/// `p1`..`p3` token), then "good" (optionally with `p1`..`p5`). Positions
/// outside `1..=20` are not clamped; they simply fall through.
pub fn parse_result(input: &str) -> Option<RaceResult> {
    let s = input.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if s.contains("dnf") || s.contains("did not finish") {
        return Some(RaceResult::Dnf);
    }

    if let Some(result) = captured_number(&EXACT_POSITION, &s).and_then(RaceResult::position) {
        return Some(result);
    }

    if s.contains("win") || s.contains("pole") {
        return RaceResult::position(1);
    }

    if s.contains("podium") {
        return Some(position_within(&s, 3).unwrap_or(RaceResult::Top3));
    }

    if s.contains("good") {
        return Some(position_within(&s, 5).unwrap_or(RaceResult::Top5));
    }

    None
}

/// The first standalone `p<n>` token, if it names a place no worse than `max`.
fn position_within(s: &str, max: u32) -> Option<RaceResult> {
    captured_number(&POSITION_TOKEN, s)
        .filter(|n| (1..=max).contains(n))
        .and_then(RaceResult::position)
}

fn captured_number(pattern: &Regex, s: &str) -> Option<u32> {
    pattern
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
