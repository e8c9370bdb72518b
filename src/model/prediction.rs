use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{MatchResult, TeamRef, Venue};
use super::lenient;
use super::matches::Match;

/// Body of a prediction submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub team_id: u32,
    pub opponent_id: u32,
    pub venue: Venue,
    pub match_date: NaiveDate,
}

/// The outcome distribution returned for a submitted prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub id: u32,
    pub team: String,
    pub opponent: String,
    pub venue: Venue,
    pub match_date: String,
    pub predicted_result: MatchResult,
    pub win_probability: f64,
    pub draw_probability: f64,
    pub loss_probability: f64,
    pub confidence: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A stored prediction, with ground truth once the match has been played.
///
/// The backend may describe the fixture inline (`team`, `opponent`, `venue`,
/// `match_date`) or by reference to a stored match (`match`, `match_detail`).
/// The accessors read whichever is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: u32,
    #[serde(default, rename = "match")]
    pub match_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_detail: Option<Match>,
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<TeamRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub opponent: Option<TeamRef>,
    #[serde(default)]
    pub match_date: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    pub predicted_result: MatchResult,
    #[serde(default)]
    pub win_probability: f64,
    #[serde(default)]
    pub draw_probability: f64,
    #[serde(default)]
    pub loss_probability: f64,
    pub confidence: f64,
    #[serde(default)]
    pub actual_result: Option<MatchResult>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl Prediction {
    pub fn team(&self) -> Option<&TeamRef> {
        self.team
            .as_ref()
            .or_else(|| self.match_detail.as_ref().map(|m| &m.team))
    }

    pub fn opponent(&self) -> Option<&TeamRef> {
        self.opponent
            .as_ref()
            .or_else(|| self.match_detail.as_ref().map(|m| &m.opponent))
    }

    pub fn venue(&self) -> Option<Venue> {
        self.venue.or_else(|| self.match_detail.as_ref().map(|m| m.venue))
    }

    /// Kick-off as sent by the backend.
    pub fn match_date(&self) -> Option<&str> {
        self.match_date
            .as_deref()
            .or_else(|| self.match_detail.as_ref().map(|m| m.date.as_str()))
    }

    /// The played result, from the prediction itself or its stored match.
    pub fn actual_result(&self) -> Option<MatchResult> {
        self.actual_result
            .or_else(|| self.match_detail.as_ref().map(|m| m.result))
    }

    /// Whether the prediction turned out right, once the result is known.
    ///
    /// Uses the backend's flag when present and otherwise compares the
    /// actual result with the predicted one.
    pub fn outcome(&self) -> Option<bool> {
        self.is_correct
            .or_else(|| self.actual_result().map(|actual| actual == self.predicted_result))
    }
}

/// Query filters accepted by the prediction list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionFilter {
    /// Case-insensitive substring of either team's name.
    pub team: Option<String>,
    pub date: Option<NaiveDate>,
}

impl PredictionFilter {
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(team) = &self.team {
            pairs.push(("team", team.clone()));
        }
        if let Some(date) = self.date {
            pairs.push(("date", date.to_string()));
        }
        pairs
    }
}
