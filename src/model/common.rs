use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Where a fixture is played, from the perspective of the first team.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
pub enum Venue {
    #[default]
    #[serde(rename = "H")]
    #[strum(serialize = "H")]
    Home,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    Away,
}

impl Venue {
    /// Label shown in venue selectors and on prediction cards.
    pub fn label(self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

/// Outcome of a fixture for the first team.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
pub enum MatchResult {
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Win,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Draw,
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    Loss,
}

impl MatchResult {
    /// The single-letter code used by the backend.
    pub fn letter(self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Draw => 'D',
            MatchResult::Loss => 'L',
        }
    }
}

/// A team reference as it appears inside a match record.
///
/// Depending on the serializer the backend either embeds the team's
/// primary key or its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamRef {
    Id(u32),
    Name(String),
}
