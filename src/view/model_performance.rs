use std::sync::Arc;

use tracing::{debug, info};

use crate::api::PredictorApi;
use crate::format::{format_date, format_percentage};
use crate::model::{ListResponse, ModelPerformance};
use crate::request::RequestHandle;

pub const EMPTY_TITLE: &str = "No model performance data available.";
pub const EMPTY_HINT: &str = "Train the model to see performance metrics.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Load,
    Train,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load model performance",
            Operation::Train => "Failed to train model",
        }
    }
}

/// One headline metric of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub accent_class: &'static str,
}

/// A rendered performance snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceRow {
    pub id: u32,
    pub model_version: String,
    pub trained_on: String,
    pub metrics: [Metric; 4],
    pub test_set_size: u32,
    pub feature_count: u32,
    pub notes: Option<String>,
}

impl From<&ModelPerformance> for PerformanceRow {
    fn from(perf: &ModelPerformance) -> Self {
        let metric = |label: &'static str, value: f64, accent_class: &'static str| Metric {
            label,
            value: format_percentage(value),
            accent_class,
        };
        Self {
            id: perf.id,
            model_version: perf.model_version.clone(),
            trained_on: format_date(&perf.training_date),
            metrics: [
                metric("Accuracy", perf.accuracy, "text-blue-600"),
                metric("Precision", perf.precision, "text-green-600"),
                metric("Recall", perf.recall, "text-yellow-600"),
                metric("F1 Score", perf.f1_score, "text-purple-600"),
            ],
            test_set_size: perf.test_set_size,
            feature_count: perf.feature_count,
            notes: perf.notes.clone().filter(|notes| !notes.is_empty()),
        }
    }
}

/// The model performance panel.
#[derive(Debug, Default)]
pub struct ModelPerformancePanel {
    performance: Vec<ModelPerformance>,
    error: Option<String>,
    pending: Option<(Operation, RequestHandle<Vec<ModelPerformance>>)>,
}

impl ModelPerformancePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading the snapshot list.
    pub fn mount<A>(&mut self, api: &Arc<A>)
    where
        A: PredictorApi + ?Sized + 'static,
    {
        let api = Arc::clone(api);
        let request = RequestHandle::spawn(async move {
            api.model_performance().await.map(ListResponse::into_items)
        });
        self.pending = Some((Operation::Load, request));
    }

    /// Retrain the model and reload the snapshot list.
    ///
    /// Ignored while a request is outstanding; returns whether training started.
    pub fn train<A>(&mut self, api: &Arc<A>) -> bool
    where
        A: PredictorApi + ?Sized + 'static,
    {
        if self.pending.is_some() {
            debug!("training trigger ignored while busy");
            return false;
        }
        let api = Arc::clone(api);
        let request = RequestHandle::spawn(async move {
            let outcome = api.train_model().await?;
            if let Some(message) = outcome.message {
                info!(response = %message, "model trained");
            }
            api.model_performance().await.map(ListResponse::into_items)
        });
        self.pending = Some((Operation::Train, request));
        true
    }

    /// Wait for the outstanding request and apply its result.
    ///
    /// Any failure replaces the list with an error banner. Returns `false`
    /// when nothing was in flight.
    pub async fn settle(&mut self) -> bool {
        let Some((operation, request)) = self.pending.take() else {
            return false;
        };
        match request.await {
            Ok(performance) => {
                debug!(count = performance.len(), ?operation, "performance loaded");
                self.performance = performance;
                self.error = None;
            }
            Err(e) => {
                debug!(error = %e, ?operation, "performance request failed");
                self.performance.clear();
                self.error = Some(e.user_message(operation.failure_message()));
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn performance(&self) -> &[ModelPerformance] {
        &self.performance
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show_skeleton(&self) -> bool {
        self.is_loading() && self.performance.is_empty()
    }

    pub fn train_disabled(&self) -> bool {
        self.is_loading()
    }

    pub fn train_label(&self) -> &'static str {
        if self.is_loading() {
            "Training..."
        } else {
            "Train Model"
        }
    }

    pub fn rows(&self) -> Vec<PerformanceRow> {
        self.performance.iter().map(PerformanceRow::from).collect()
    }

    /// Title and hint shown when there is nothing to list.
    pub fn placeholder(&self) -> Option<(&'static str, &'static str)> {
        (!self.show_skeleton() && self.performance.is_empty()).then_some((EMPTY_TITLE, EMPTY_HINT))
    }
}
