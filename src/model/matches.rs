use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{MatchResult, TeamRef, Venue};

/// A single historical fixture from one team's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    /// Kick-off as sent by the backend, either a date or a date-time.
    pub date: String,
    pub team: TeamRef,
    pub opponent: TeamRef,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub opponent_name: Option<String>,
    pub venue: Venue,
    pub result: MatchResult,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub team_xg: f64,
    #[serde(default)]
    pub opponent_xg: f64,
    #[serde(default)]
    pub possession: f64,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub shots_on_target: u32,
    #[serde(default)]
    pub deep_passes: u32,
    #[serde(default)]
    pub passes_completed_percentage: f64,
}

impl Match {
    /// Display name of the first team, if the backend sent one.
    pub fn team_label(&self) -> Option<&str> {
        label(self.team_name.as_deref(), &self.team)
    }

    pub fn opponent_label(&self) -> Option<&str> {
        label(self.opponent_name.as_deref(), &self.opponent)
    }

    /// Calendar date of the fixture.
    pub fn kickoff_date(&self) -> Option<NaiveDate> {
        crate::format::parse_calendar_date(&self.date)
    }
}

fn label<'a>(name: Option<&'a str>, team: &'a TeamRef) -> Option<&'a str> {
    name.or(match team {
        TeamRef::Name(name) => Some(name.as_str()),
        TeamRef::Id(_) => None,
    })
}

/// Query filters accepted by the match list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    /// Case-insensitive substring of either team's name.
    pub team: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub result: Option<MatchResult>,
}

impl MatchFilter {
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn between(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn result(mut self, result: MatchResult) -> Self {
        self.result = Some(result);
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(team) = &self.team {
            pairs.push(("team", team.clone()));
        }
        if let Some(start_date) = self.start_date {
            pairs.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            pairs.push(("end_date", end_date.to_string()));
        }
        if let Some(result) = self.result {
            pairs.push(("result", result.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_with_team_ids_and_names() {
        let m: Match = serde_json::from_str(
            r#"{"id": 11, "date": "2024-05-01T15:00:00Z", "team": 1, "team_name": "Arsenal",
                "opponent": 2, "opponent_name": "Chelsea", "venue": "H", "result": "W",
                "goals_for": 2, "goals_against": 1, "shots": 14, "shots_on_target": 6}"#,
        )
        .unwrap();
        assert_eq!(m.team_label(), Some("Arsenal"));
        assert_eq!(m.opponent_label(), Some("Chelsea"));
        assert_eq!(m.kickoff_date(), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(m.possession, 0.0);
    }

    #[test]
    fn test_match_with_team_names_inline() {
        let m: Match = serde_json::from_str(
            r#"{"id": 12, "date": "2024-05-04", "team": "Arsenal", "opponent": "Spurs",
                "venue": "A", "result": "D", "team_xg": 1.4, "opponent_xg": 0.9,
                "possession": 57.0, "deep_passes": 9, "passes_completed_percentage": 84.5}"#,
        )
        .unwrap();
        assert_eq!(m.team_label(), Some("Arsenal"));
        assert_eq!(m.venue, Venue::Away);
        assert_eq!(m.result, MatchResult::Draw);
    }

    #[test]
    fn test_filter_skips_unset_fields() {
        assert!(MatchFilter::default().query_pairs().is_empty());

        let filter = MatchFilter::default()
            .team("Arsenal")
            .between(
                NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            )
            .result(MatchResult::Win);
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("team", "Arsenal".to_string()),
                ("start_date", "2023-08-01".to_string()),
                ("end_date", "2024-05-31".to_string()),
                ("result", "W".to_string()),
            ]
        );
    }
}
