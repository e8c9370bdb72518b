use async_trait::async_trait;

use crate::error::Result;
use crate::model::*;

/// The operations the view units need from the prediction backend.
///
/// [`crate::PredictorClient`] implements this over HTTP. Anything else that
/// can answer these calls (a cache, a fixture, a test double) can stand in
/// for it.
#[async_trait]
pub trait PredictorApi: Send + Sync {
    async fn list_teams(&self) -> Result<ListResponse<Team>>;

    async fn get_team(&self, team_id: u32) -> Result<Team>;

    async fn get_team_stats(&self, team_id: u32) -> Result<TeamStats>;

    async fn list_matches(&self, filter: MatchFilter) -> Result<ListResponse<Match>>;

    async fn get_match(&self, match_id: u32) -> Result<Match>;

    async fn upcoming_matches(&self) -> Result<ListResponse<Match>>;

    async fn list_predictions(&self, filter: PredictionFilter) -> Result<ListResponse<Prediction>>;

    async fn get_prediction(&self, prediction_id: u32) -> Result<Prediction>;

    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse>;

    async fn train_model(&self) -> Result<TrainOutcome>;

    async fn model_info(&self) -> Result<ModelInfo>;

    async fn model_performance(&self) -> Result<ListResponse<ModelPerformance>>;
}
