use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::api::PredictorApi;
use crate::format::{format_percentage, result_color};
use crate::model::{ListResponse, MatchResult, Team, TeamStats};
use crate::request::RequestHandle;
use crate::view::{team_options, TeamSelect};

const TEAMS_LOAD_FAILED: &str = "Failed to load teams";
const STATS_LOAD_FAILED: &str = "Failed to load team stats";
const NO_SELECTION: &str = "Select a team to view detailed statistics";
const NO_STATS: &str = "No statistics available for this team";

/// A single number on the stats grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub accent_class: &'static str,
}

/// A recent-form badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormBadge {
    pub letter: char,
    pub color_class: &'static str,
}

impl From<MatchResult> for FormBadge {
    fn from(result: MatchResult) -> Self {
        Self {
            letter: result.letter(),
            color_class: result_color(result),
        }
    }
}

/// Everything the panel shows for a selected team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStatsView {
    pub team_name: String,
    pub tiles: Vec<StatTile>,
    pub recent_form: Vec<FormBadge>,
}

impl TeamStatsView {
    pub fn new(stats: &TeamStats) -> Self {
        let team = &stats.team;
        let tiles = vec![
            tile("Matches Played", stats.matches_played(), "text-gray-800"),
            tile("Wins", stats.wins(), "text-green-600"),
            tile("Draws", stats.draws(), "text-yellow-600"),
            tile("Losses", stats.losses(), "text-red-600"),
            tile("Points", team.points, "text-gray-800"),
            StatTile {
                label: "Win Rate",
                value: format_percentage(stats.win_rate_fraction()),
                accent_class: "text-blue-600",
            },
            tile("Goals For", team.goals_for, "text-gray-800"),
            tile("Goals Against", team.goals_against, "text-gray-800"),
        ];
        Self {
            team_name: team.name.clone(),
            tiles,
            recent_form: stats.recent_form.iter().copied().map(FormBadge::from).collect_vec(),
        }
    }

    /// The recent form as a compact string, e.g. `WWDLW`.
    pub fn form_string(&self) -> String {
        self.recent_form.iter().map(|badge| badge.letter).join("")
    }
}

fn tile(label: &'static str, value: u32, accent_class: &'static str) -> StatTile {
    StatTile {
        label,
        value: value.to_string(),
        accent_class,
    }
}

/// The team statistics panel.
#[derive(Debug, Default)]
pub struct TeamStatsPanel {
    teams: Vec<Team>,
    selected: Option<u32>,
    stats: Option<TeamStats>,
    error: Option<String>,
    teams_request: Option<RequestHandle<Vec<Team>>>,
    stats_request: Option<RequestHandle<TeamStats>>,
}

impl TeamStatsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading the team list.
    pub fn mount<A>(&mut self, api: &Arc<A>)
    where
        A: PredictorApi + ?Sized + 'static,
    {
        let api = Arc::clone(api);
        self.teams_request = Some(RequestHandle::spawn(async move {
            api.list_teams().await.map(ListResponse::into_items)
        }));
    }

    /// Change the selected team and start fetching its statistics.
    ///
    /// A stats request still in flight for a previous selection is aborted.
    pub fn select_team<A>(&mut self, team_id: Option<u32>, api: &Arc<A>)
    where
        A: PredictorApi + ?Sized + 'static,
    {
        if team_id == self.selected {
            return;
        }
        if self.stats_request.take().is_some() {
            debug!(previous = ?self.selected, "dropping stats request for previous selection");
        }
        self.selected = team_id;
        self.stats = None;
        self.error = None;

        if let Some(team_id) = team_id {
            let api = Arc::clone(api);
            self.stats_request = Some(RequestHandle::spawn(async move {
                api.get_team_stats(team_id).await
            }));
        }
    }

    /// Wait for outstanding requests and apply their results.
    ///
    /// Returns `false` when nothing was in flight.
    pub async fn settle(&mut self) -> bool {
        let mut settled = false;
        if let Some(request) = self.teams_request.take() {
            settled = true;
            match request.await {
                Ok(teams) => self.teams = teams,
                Err(e) => {
                    debug!(error = %e, "team list failed");
                    self.teams.clear();
                    self.error = Some(TEAMS_LOAD_FAILED.to_string());
                }
            }
        }
        if let Some(request) = self.stats_request.take() {
            settled = true;
            match request.await {
                Ok(stats) => self.stats = Some(stats),
                Err(e) => {
                    debug!(error = %e, "team stats failed");
                    self.error = Some(e.user_message(STATS_LOAD_FAILED));
                }
            }
        }
        settled
    }

    /// Abort every outstanding request.
    pub fn cancel(&mut self) {
        self.teams_request = None;
        self.stats_request = None;
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn stats(&self) -> Option<&TeamStats> {
        self.stats.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.teams_request.is_some() || self.stats_request.is_some()
    }

    /// Whether to show the loading skeleton instead of the panel.
    pub fn show_skeleton(&self) -> bool {
        self.is_loading() && self.teams.is_empty()
    }

    pub fn team_select(&self) -> TeamSelect {
        TeamSelect {
            placeholder: "Choose a team...",
            options: team_options(&self.teams),
            selected: self.selected,
            disabled: false,
        }
    }

    pub fn view(&self) -> Option<TeamStatsView> {
        self.stats.as_ref().map(TeamStatsView::new)
    }

    /// Explanatory text shown in place of statistics.
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.error.is_some() || self.stats.is_some() {
            return None;
        }
        match self.selected {
            None => Some(NO_SELECTION),
            Some(_) if self.stats_request.is_none() => Some(NO_STATS),
            Some(_) => None,
        }
    }
}
