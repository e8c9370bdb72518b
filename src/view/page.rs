use std::sync::Arc;

use strum::IntoEnumIterator;
use tracing::debug;

use crate::api::PredictorApi;
use crate::model::PredictionResponse;
use crate::view::{FormError, ModelPerformancePanel, PredictionCard, PredictionForm, TeamStatsPanel};

/// Top-level navigation tabs.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum Tab {
    #[default]
    Predict,
    Teams,
    Model,
}

impl Tab {
    /// Every tab, in display order.
    pub fn all() -> Vec<Tab> {
        Tab::iter().collect()
    }
}

/// The view unit mounted for the active tab.
#[derive(Debug)]
pub enum TabView {
    Predict(PredictionForm),
    Teams(TeamStatsPanel),
    Model(ModelPerformancePanel),
}

impl TabView {
    fn tab(&self) -> Tab {
        match self {
            TabView::Predict(_) => Tab::Predict,
            TabView::Teams(_) => Tab::Teams,
            TabView::Model(_) => Tab::Model,
        }
    }
}

/// One browsing session: the active tab and the predictions made so far.
///
/// Predictions live only as long as the page, most recent first.
pub struct Page<A: PredictorApi + ?Sized + 'static> {
    api: Arc<A>,
    view: TabView,
    predictions: Vec<PredictionResponse>,
}

impl<A: PredictorApi + ?Sized + 'static> Page<A> {
    /// Open a session on the prediction tab.
    pub fn new(api: Arc<A>) -> Self {
        let view = mount(Tab::Predict, &api);
        Self {
            api,
            view,
            predictions: Vec::new(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.view.tab()
    }

    /// Switch tabs. The previous tab's unit is dropped along with any
    /// request it still had in flight, and the new one is mounted fresh.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab() {
            return;
        }
        debug!(from = %self.active_tab(), to = %tab, "switching tab");
        self.view = mount(tab, &self.api);
    }

    pub fn view(&self) -> &TabView {
        &self.view
    }

    pub fn form(&self) -> Option<&PredictionForm> {
        match &self.view {
            TabView::Predict(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut PredictionForm> {
        match &mut self.view {
            TabView::Predict(form) => Some(form),
            _ => None,
        }
    }

    pub fn team_stats(&self) -> Option<&TeamStatsPanel> {
        match &self.view {
            TabView::Teams(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn model_performance(&self) -> Option<&ModelPerformancePanel> {
        match &self.view {
            TabView::Model(panel) => Some(panel),
            _ => None,
        }
    }

    /// Submit the prediction form. Does nothing outside the prediction tab.
    pub fn submit_prediction(&mut self) -> Option<Result<(), FormError>> {
        let api = &self.api;
        match &mut self.view {
            TabView::Predict(form) => Some(form.submit(api)),
            _ => None,
        }
    }

    /// Select a team on the stats tab.
    pub fn select_stats_team(&mut self, team_id: Option<u32>) {
        let api = &self.api;
        if let TabView::Teams(panel) = &mut self.view {
            panel.select_team(team_id, api);
        }
    }

    /// Trigger training on the model tab; returns whether it started.
    pub fn train_model(&mut self) -> bool {
        let api = &self.api;
        match &mut self.view {
            TabView::Model(panel) => panel.train(api),
            _ => false,
        }
    }

    /// Wait for the active unit's outstanding work and apply it.
    pub async fn settle(&mut self) -> bool {
        let Self { view, predictions, .. } = self;
        match view {
            TabView::Predict(form) => form.settle(|p| record(predictions, p)).await,
            TabView::Teams(panel) => panel.settle().await,
            TabView::Model(panel) => panel.settle().await,
        }
    }

    /// Add a prediction to the top of the session list.
    pub fn record_prediction(&mut self, prediction: PredictionResponse) {
        record(&mut self.predictions, prediction);
    }

    /// Predictions made this session, most recent first.
    pub fn predictions(&self) -> &[PredictionResponse] {
        &self.predictions
    }

    pub fn prediction_cards(&self) -> Vec<PredictionCard> {
        self.predictions.iter().map(PredictionCard::from).collect()
    }
}

fn record(predictions: &mut Vec<PredictionResponse>, prediction: PredictionResponse) {
    debug!(id = prediction.id, total = predictions.len() + 1, "prediction recorded");
    predictions.insert(0, prediction);
}

fn mount<A: PredictorApi + ?Sized + 'static>(tab: Tab, api: &Arc<A>) -> TabView {
    match tab {
        Tab::Predict => {
            let mut form = PredictionForm::new();
            form.mount(api);
            TabView::Predict(form)
        }
        Tab::Teams => {
            let mut panel = TeamStatsPanel::new();
            panel.mount(api);
            TabView::Teams(panel)
        }
        Tab::Model => {
            let mut panel = ModelPerformancePanel::new();
            panel.mount(api);
            TabView::Model(panel)
        }
    }
}
