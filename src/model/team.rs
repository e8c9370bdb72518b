use serde::{Deserialize, Serialize};

use super::common::MatchResult;
use super::matches::Match;

/// A team and its cumulative record.
///
/// The list endpoint only serializes identity fields, so every counter
/// falls back to zero when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub points: u32,
    /// Share of matches won, as a fraction.
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub avg_goals_scored: f64,
    #[serde(default)]
    pub avg_goals_conceded: f64,
}

/// Aggregated statistics for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: Team,
    /// Share of matches won, as a percentage rounded to two decimals.
    pub win_rate: f64,
    /// Most recent results first.
    #[serde(default)]
    pub recent_form: Vec<MatchResult>,
    #[serde(default)]
    pub recent_matches: Vec<Match>,
    #[serde(default)]
    pub total_matches: Option<u32>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub draws: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
}

impl TeamStats {
    /// The win rate as a fraction, comparable with [`Team::win_rate`].
    pub fn win_rate_fraction(&self) -> f64 {
        self.win_rate / 100.0
    }

    /// Matches played, preferring the aggregate counter over the team record.
    pub fn matches_played(&self) -> u32 {
        self.total_matches.unwrap_or(self.team.matches_played)
    }

    pub fn wins(&self) -> u32 {
        self.wins.unwrap_or(self.team.wins)
    }

    pub fn draws(&self) -> u32 {
        self.draws.unwrap_or(self.team.draws)
    }

    pub fn losses(&self) -> u32 {
        self.losses.unwrap_or(self.team.losses)
    }
}
