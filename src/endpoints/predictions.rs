use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoints::{get_json, get_json_with_query, post_json};
use crate::error::Result;
use crate::model::{ListResponse, Prediction, PredictionFilter, PredictionRequest, PredictionResponse};

pub(crate) async fn list_predictions(
    client: &reqwest::Client,
    config: &ClientConfig,
    filter: &PredictionFilter,
) -> Result<ListResponse<Prediction>> {
    get_json_with_query(client, &config.url("predictions/"), &filter.query_pairs()).await
}

pub(crate) async fn get_prediction(
    client: &reqwest::Client,
    config: &ClientConfig,
    prediction_id: u32,
) -> Result<Prediction> {
    get_json(client, &config.url(&format!("predictions/{prediction_id}/"))).await
}

pub(crate) async fn predict(
    client: &reqwest::Client,
    config: &ClientConfig,
    request: &PredictionRequest,
) -> Result<PredictionResponse> {
    let response: PredictionResponse =
        post_json(client, &config.url("predict/"), Some(request)).await?;
    debug!(
        id = response.id,
        result = %response.predicted_result,
        confidence = response.confidence,
        "received prediction"
    );
    Ok(response)
}
