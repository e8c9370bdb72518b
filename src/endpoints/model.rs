use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoints::{get_json, post_json};
use crate::error::Result;
use crate::model::{ListResponse, ModelInfo, ModelPerformance, TrainOutcome};

pub(crate) async fn train_model(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<TrainOutcome> {
    let body: Value = post_json::<(), _>(client, &config.url("model/train/"), None).await?;
    let outcome = TrainOutcome::from_body(body);
    debug!(message = ?outcome.message, "training finished");
    Ok(outcome)
}

pub(crate) async fn model_info(client: &reqwest::Client, config: &ClientConfig) -> Result<ModelInfo> {
    let body: Value = get_json(client, &config.url("model/info/")).await?;
    Ok(ModelInfo::from_body(body))
}

pub(crate) async fn model_performance(
    client: &reqwest::Client,
    config: &ClientConfig,
) -> Result<ListResponse<ModelPerformance>> {
    get_json(client, &config.url("model/performance/")).await
}
