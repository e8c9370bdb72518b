use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoints::get_json;
use crate::error::Result;
use crate::model::{ListResponse, Team, TeamStats};

pub(crate) async fn list_teams(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<ListResponse<Team>> {
    let teams: ListResponse<Team> = get_json(client, &config.url("teams/")).await?;
    debug!(count = ?teams.total_count(), "fetched team list");
    Ok(teams)
}

pub(crate) async fn get_team(
    client: &reqwest::Client,
    config: &ClientConfig,
    team_id: u32,
) -> Result<Team> {
    get_json(client, &config.url(&format!("teams/{team_id}/"))).await
}

pub(crate) async fn get_team_stats(
    client: &reqwest::Client,
    config: &ClientConfig,
    team_id: u32,
) -> Result<TeamStats> {
    let stats: TeamStats = get_json(client, &config.url(&format!("teams/{team_id}/stats/"))).await?;
    debug!(
        team_id,
        recent = stats.recent_form.len(),
        "fetched team stats"
    );
    Ok(stats)
}
