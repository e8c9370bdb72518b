use async_trait::async_trait;
use tracing::instrument;

use crate::api::PredictorApi;
use crate::config::ClientConfig;
use crate::endpoints;
use crate::error::Result;
use crate::model::*;

/// The main entry point for talking to the prediction backend.
///
/// `PredictorClient` wraps a [`reqwest::Client`] and exposes one method per
/// backend operation. Every method issues exactly one request; nothing is
/// retried or cached.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> match_predictor_client::Result<()> {
/// use match_predictor_client::PredictorClient;
///
/// let client = PredictorClient::new();
/// let teams = client.list_teams().await?.into_items();
/// println!("Found {} teams", teams.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PredictorClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictorClient {
    /// Create a client for the backend named by the environment.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client for an explicit backend.
    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every team. The body may be paginated or a bare array.
    #[instrument(skip(self))]
    pub async fn list_teams(&self) -> Result<ListResponse<Team>> {
        endpoints::teams::list_teams(&self.http, &self.config).await
    }

    /// Fetch one team by ID.
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: u32) -> Result<Team> {
        endpoints::teams::get_team(&self.http, &self.config, team_id).await
    }

    /// Fetch aggregate statistics, recent form and recent matches for a team.
    #[instrument(skip(self))]
    pub async fn get_team_stats(&self, team_id: u32) -> Result<TeamStats> {
        endpoints::teams::get_team_stats(&self.http, &self.config, team_id).await
    }

    /// Fetch historical matches, newest first.
    #[instrument(skip(self))]
    pub async fn list_matches(&self, filter: &MatchFilter) -> Result<ListResponse<Match>> {
        endpoints::matches::list_matches(&self.http, &self.config, filter).await
    }

    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: u32) -> Result<Match> {
        endpoints::matches::get_match(&self.http, &self.config, match_id).await
    }

    /// Fetch fixtures from today onwards.
    #[instrument(skip(self))]
    pub async fn upcoming_matches(&self) -> Result<ListResponse<Match>> {
        endpoints::matches::upcoming_matches(&self.http, &self.config).await
    }

    /// Fetch stored predictions, newest first.
    #[instrument(skip(self))]
    pub async fn list_predictions(
        &self,
        filter: &PredictionFilter,
    ) -> Result<ListResponse<Prediction>> {
        endpoints::predictions::list_predictions(&self.http, &self.config, filter).await
    }

    #[instrument(skip(self))]
    pub async fn get_prediction(&self, prediction_id: u32) -> Result<Prediction> {
        endpoints::predictions::get_prediction(&self.http, &self.config, prediction_id).await
    }

    /// Submit a fixture and receive the predicted outcome distribution.
    #[instrument(skip(self))]
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        endpoints::predictions::predict(&self.http, &self.config, request).await
    }

    /// Retrain the model on every stored match.
    #[instrument(skip(self))]
    pub async fn train_model(&self) -> Result<TrainOutcome> {
        endpoints::model::train_model(&self.http, &self.config).await
    }

    #[instrument(skip(self))]
    pub async fn model_info(&self) -> Result<ModelInfo> {
        endpoints::model::model_info(&self.http, &self.config).await
    }

    /// Fetch evaluation snapshots of every trained model version.
    #[instrument(skip(self))]
    pub async fn model_performance(&self) -> Result<ListResponse<ModelPerformance>> {
        endpoints::model::model_performance(&self.http, &self.config).await
    }
}

impl Default for PredictorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictorApi for PredictorClient {
    async fn list_teams(&self) -> Result<ListResponse<Team>> {
        PredictorClient::list_teams(self).await
    }

    async fn get_team(&self, team_id: u32) -> Result<Team> {
        PredictorClient::get_team(self, team_id).await
    }

    async fn get_team_stats(&self, team_id: u32) -> Result<TeamStats> {
        PredictorClient::get_team_stats(self, team_id).await
    }

    async fn list_matches(&self, filter: MatchFilter) -> Result<ListResponse<Match>> {
        PredictorClient::list_matches(self, &filter).await
    }

    async fn get_match(&self, match_id: u32) -> Result<Match> {
        PredictorClient::get_match(self, match_id).await
    }

    async fn upcoming_matches(&self) -> Result<ListResponse<Match>> {
        PredictorClient::upcoming_matches(self).await
    }

    async fn list_predictions(&self, filter: PredictionFilter) -> Result<ListResponse<Prediction>> {
        PredictorClient::list_predictions(self, &filter).await
    }

    async fn get_prediction(&self, prediction_id: u32) -> Result<Prediction> {
        PredictorClient::get_prediction(self, prediction_id).await
    }

    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse> {
        PredictorClient::predict(self, &request).await
    }

    async fn train_model(&self) -> Result<TrainOutcome> {
        PredictorClient::train_model(self).await
    }

    async fn model_info(&self) -> Result<ModelInfo> {
        PredictorClient::model_info(self).await
    }

    async fn model_performance(&self) -> Result<ListResponse<ModelPerformance>> {
        PredictorClient::model_performance(self).await
    }
}
