use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient, lenient_or_default};

/// Evaluation metrics of one trained model version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub id: u32,
    pub model_version: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    #[serde(alias = "created_at")]
    pub training_date: String,
    #[serde(default, alias = "test_matches_count")]
    pub test_set_size: u32,
    #[serde(default)]
    pub feature_count: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Description of the model currently loaded by the backend.
///
/// The backend does not fix this payload, so every field is optional and
/// mistyped fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub is_trained: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub predictors: Vec<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub rolling_predictors: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub model_type: Option<String>,
}

impl ModelInfo {
    /// Read whatever the backend sent; a body that is not an object yields the default.
    pub(crate) fn from_body(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }

    pub fn feature_count(&self) -> usize {
        self.predictors.len() + self.rolling_predictors.len()
    }
}

/// Response of the training endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub performance: Option<ModelPerformance>,
}

impl TrainOutcome {
    /// Read a successful training response of any shape.
    ///
    /// A bare string is taken as the message. Anything else that is not an
    /// object yields an empty outcome.
    pub(crate) fn from_body(body: Value) -> Self {
        match body {
            Value::String(message) => Self {
                message: Some(message),
                performance: None,
            },
            body => serde_json::from_value(body).unwrap_or_default(),
        }
    }
}
