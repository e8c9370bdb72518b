use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::PredictorApi;
use crate::error::{PredictorError, Result};
use crate::model::*;

/// In-memory backend that records every call it receives.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub teams_body: Mutex<Value>,
    pub teams_error: Mutex<Option<String>>,
    pub stats: Mutex<HashMap<u32, TeamStats>>,
    pub stats_delay: Mutex<HashMap<u32, Duration>>,
    pub stats_failure: Mutex<Option<(u16, Option<String>)>>,
    /// Teams whose stats request ran to completion.
    pub stats_served: Mutex<Vec<u32>>,
    pub prediction: Mutex<Option<PredictionResponse>>,
    pub predict_error: Mutex<Option<String>>,
    pub performance_body: Mutex<Value>,
    pub performance_after_training: Mutex<Option<Value>>,
    pub performance_failure: Mutex<Option<(u16, Option<String>)>>,
    pub train_error: Mutex<Option<String>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub predict_requests: Mutex<Vec<PredictionRequest>>,
}

pub(crate) fn status_error(status: u16, message: Option<&str>) -> PredictorError {
    PredictorError::UnexpectedStatus {
        url: "http://fake.test/api/".to_string(),
        status: reqwest::StatusCode::from_u16(status).unwrap(),
        message: message.map(str::to_string),
    }
}

pub(crate) fn team(id: u32, name: &str) -> Team {
    serde_json::from_value(json!({"id": id, "name": name})).unwrap()
}

pub(crate) fn prediction(id: u32, team: &str, opponent: &str) -> PredictionResponse {
    serde_json::from_value(json!({
        "id": id,
        "team": team,
        "opponent": opponent,
        "venue": "H",
        "match_date": "2024-05-01",
        "predicted_result": "W",
        "win_probability": 0.6,
        "draw_probability": 0.25,
        "loss_probability": 0.15,
        "confidence": 0.6,
        "created_at": "2024-04-30T09:00:00Z"
    }))
    .unwrap()
}

pub(crate) fn performance(id: u32, version: &str) -> Value {
    json!({
        "id": id,
        "model_version": version,
        "accuracy": 0.612,
        "precision": 0.587,
        "recall": 0.553,
        "f1_score": 0.569,
        "training_date": "2024-05-01T12:00:00Z",
        "test_set_size": 120,
        "feature_count": 12
    })
}

impl FakeApi {
    /// A backend serving two teams, A and B, as a paginated envelope.
    pub fn with_two_teams() -> Self {
        let api = Self::default();
        *api.teams_body.lock().unwrap() = json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]
        });
        api
    }

    pub fn calls_to(&self, name: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == name).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

#[async_trait]
impl PredictorApi for FakeApi {
    async fn list_teams(&self) -> Result<ListResponse<Team>> {
        self.record("list_teams");
        if let Some(message) = self.teams_error.lock().unwrap().clone() {
            return Err(status_error(500, Some(&message)));
        }
        Ok(decode(self.teams_body.lock().unwrap().clone()))
    }

    async fn get_team(&self, team_id: u32) -> Result<Team> {
        self.record("get_team");
        Ok(team(team_id, "Team"))
    }

    async fn get_team_stats(&self, team_id: u32) -> Result<TeamStats> {
        self.record("get_team_stats");
        let delay = self.stats_delay.lock().unwrap().get(&team_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.stats_served.lock().unwrap().push(team_id);
        if let Some((status, message)) = self.stats_failure.lock().unwrap().clone() {
            return Err(status_error(status, message.as_deref()));
        }
        self.stats
            .lock()
            .unwrap()
            .get(&team_id)
            .cloned()
            .ok_or_else(|| status_error(404, Some("No matches found for this team")))
    }

    async fn list_matches(&self, _filter: MatchFilter) -> Result<ListResponse<Match>> {
        self.record("list_matches");
        Ok(ListResponse::Bare(Vec::new()))
    }

    async fn get_match(&self, _match_id: u32) -> Result<Match> {
        self.record("get_match");
        Err(status_error(404, None))
    }

    async fn upcoming_matches(&self) -> Result<ListResponse<Match>> {
        self.record("upcoming_matches");
        Ok(ListResponse::Bare(Vec::new()))
    }

    async fn list_predictions(&self, _filter: PredictionFilter) -> Result<ListResponse<Prediction>> {
        self.record("list_predictions");
        Ok(ListResponse::Bare(Vec::new()))
    }

    async fn get_prediction(&self, _prediction_id: u32) -> Result<Prediction> {
        self.record("get_prediction");
        Err(status_error(404, None))
    }

    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse> {
        self.record("predict");
        self.predict_requests.lock().unwrap().push(request);
        if let Some(message) = self.predict_error.lock().unwrap().clone() {
            return Err(status_error(500, Some(&message)));
        }
        self.prediction
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| status_error(500, None))
    }

    async fn train_model(&self) -> Result<TrainOutcome> {
        self.record("train_model");
        if let Some(message) = self.train_error.lock().unwrap().clone() {
            return Err(status_error(400, Some(&message)));
        }
        if let Some(body) = self.performance_after_training.lock().unwrap().take() {
            *self.performance_body.lock().unwrap() = body;
        }
        Ok(TrainOutcome {
            message: Some("Model trained successfully".to_string()),
            performance: None,
        })
    }

    async fn model_info(&self) -> Result<ModelInfo> {
        self.record("model_info");
        Ok(ModelInfo::default())
    }

    async fn model_performance(&self) -> Result<ListResponse<ModelPerformance>> {
        self.record("model_performance");
        if let Some((status, message)) = self.performance_failure.lock().unwrap().clone() {
            return Err(status_error(status, message.as_deref()));
        }
        Ok(decode(self.performance_body.lock().unwrap().clone()))
    }
}
