use crate::config::ClientConfig;
use crate::endpoints::{get_json, get_json_with_query};
use crate::error::Result;
use crate::model::{ListResponse, Match, MatchFilter};

pub(crate) async fn list_matches(
    client: &reqwest::Client,
    config: &ClientConfig,
    filter: &MatchFilter,
) -> Result<ListResponse<Match>> {
    get_json_with_query(client, &config.url("matches/"), &filter.query_pairs()).await
}

pub(crate) async fn get_match(
    client: &reqwest::Client,
    config: &ClientConfig,
    match_id: u32,
) -> Result<Match> {
    get_json(client, &config.url(&format!("matches/{match_id}/"))).await
}

pub(crate) async fn upcoming_matches(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<ListResponse<Match>> {
    get_json(client, &config.url("matches/upcoming/")).await
}
