use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::api::PredictorApi;
use crate::error::Result;
use crate::model::{ListResponse, PredictionRequest, PredictionResponse, Team, Venue};
use crate::request::RequestHandle;
use crate::view::{team_options, TeamSelect};

const TEAMS_LOAD_FAILED: &str = "Failed to load teams";
const PREDICTION_FAILED: &str = "Failed to make prediction";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Not mounted yet.
    Idle,
    TeamsLoading,
    Ready,
    Submitting,
    /// The last action failed; the message is shown inline.
    Error(String),
}

/// Why a submission was refused before reaching the backend.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Team and opponent must be different")]
    SameTeams,
    #[error("A request is already in progress")]
    Busy,
}

#[derive(Debug)]
enum Pending {
    Teams(RequestHandle<Vec<Team>>),
    Prediction(RequestHandle<PredictionResponse>),
}

/// The "predict a match" form.
#[derive(Debug)]
pub struct PredictionForm {
    teams: Vec<Team>,
    team: Option<u32>,
    opponent: Option<u32>,
    match_date: Option<NaiveDate>,
    venue: Venue,
    status: FormStatus,
    pending: Option<Pending>,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            team: None,
            opponent: None,
            match_date: None,
            venue: Venue::Home,
            status: FormStatus::Idle,
            pending: None,
        }
    }

    /// Start loading the team list.
    pub fn mount<A>(&mut self, api: &Arc<A>)
    where
        A: PredictorApi + ?Sized + 'static,
    {
        let api = Arc::clone(api);
        self.status = FormStatus::TeamsLoading;
        self.pending = Some(Pending::Teams(RequestHandle::spawn(async move {
            api.list_teams().await.map(ListResponse::into_items)
        })));
    }

    pub fn select_team(&mut self, team_id: Option<u32>) {
        self.team = team_id;
    }

    pub fn select_opponent(&mut self, team_id: Option<u32>) {
        self.opponent = team_id;
    }

    pub fn set_match_date(&mut self, date: Option<NaiveDate>) {
        self.match_date = date;
    }

    /// Set the date from a `YYYY-MM-DD` input value. An empty value clears it.
    ///
    /// Unparsable input leaves the current date untouched.
    pub fn set_match_date_str(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        self.match_date = if value.is_empty() {
            None
        } else {
            Some(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
        };
        Ok(())
    }

    pub fn set_venue(&mut self, venue: Venue) {
        self.venue = venue;
    }

    /// Build the request from the current fields.
    pub fn validate(&self) -> std::result::Result<PredictionRequest, FormError> {
        let (Some(team_id), Some(opponent_id), Some(match_date)) =
            (self.team, self.opponent, self.match_date)
        else {
            return Err(FormError::MissingFields);
        };
        if team_id == opponent_id {
            return Err(FormError::SameTeams);
        }
        Ok(PredictionRequest {
            team_id,
            opponent_id,
            venue: self.venue,
            match_date,
        })
    }

    /// Validate the fields and, if they are valid, send the prediction request.
    ///
    /// Invalid input is reported inline and never reaches the backend.
    pub fn submit<A>(&mut self, api: &Arc<A>) -> std::result::Result<(), FormError>
    where
        A: PredictorApi + ?Sized + 'static,
    {
        if self.pending.is_some() {
            return Err(FormError::Busy);
        }
        let request = match self.validate() {
            Ok(request) => request,
            Err(e) => {
                self.status = FormStatus::Error(e.to_string());
                return Err(e);
            }
        };
        debug!(?request, "submitting prediction");
        let api = Arc::clone(api);
        self.status = FormStatus::Submitting;
        self.pending = Some(Pending::Prediction(RequestHandle::spawn(async move {
            api.predict(request).await
        })));
        Ok(())
    }

    /// Wait for the outstanding request and apply its result.
    ///
    /// A new prediction is handed to `on_prediction` and the fields are
    /// reset. Returns `false` when nothing was in flight.
    pub async fn settle(&mut self, on_prediction: impl FnOnce(PredictionResponse)) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        match pending {
            Pending::Teams(request) => match request.await {
                Ok(teams) => {
                    debug!(count = teams.len(), "teams loaded");
                    self.teams = teams;
                    self.status = FormStatus::Ready;
                }
                Err(e) => {
                    error!(error = %e, "error loading teams");
                    self.teams.clear();
                    self.status = FormStatus::Error(TEAMS_LOAD_FAILED.to_string());
                }
            },
            Pending::Prediction(request) => match request.await {
                Ok(prediction) => {
                    on_prediction(prediction);
                    self.reset_fields();
                    self.status = FormStatus::Ready;
                }
                Err(e) => {
                    self.status = FormStatus::Error(e.user_message(PREDICTION_FAILED));
                }
            },
        }
        true
    }

    /// Abort the outstanding request, if any.
    pub fn cancel(&mut self) {
        match self.pending.take() {
            Some(Pending::Teams(_)) => self.status = FormStatus::Idle,
            Some(Pending::Prediction(_)) => self.status = FormStatus::Ready,
            None => {}
        }
    }

    fn reset_fields(&mut self) {
        self.team = None;
        self.opponent = None;
        self.match_date = None;
        self.venue = Venue::Home;
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self) -> Option<u32> {
        self.team
    }

    pub fn opponent(&self) -> Option<u32> {
        self.opponent
    }

    pub fn match_date(&self) -> Option<NaiveDate> {
        self.match_date
    }

    pub fn venue(&self) -> Venue {
        self.venue
    }

    pub fn is_loading_teams(&self) -> bool {
        self.status == FormStatus::TeamsLoading
    }

    pub fn team_select(&self) -> TeamSelect {
        self.select("Select a team", self.team)
    }

    pub fn opponent_select(&self) -> TeamSelect {
        self.select("Select opponent", self.opponent)
    }

    fn select(&self, placeholder: &'static str, selected: Option<u32>) -> TeamSelect {
        let loading = self.is_loading_teams();
        TeamSelect {
            placeholder: if loading { "Loading teams..." } else { placeholder },
            options: team_options(&self.teams),
            selected,
            disabled: loading,
        }
    }

    pub fn venue_options() -> [(Venue, &'static str); 2] {
        [
            (Venue::Home, Venue::Home.label()),
            (Venue::Away, Venue::Away.label()),
        ]
    }

    pub fn submit_disabled(&self) -> bool {
        matches!(self.status, FormStatus::Submitting | FormStatus::TeamsLoading)
            || self.teams.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.status {
            FormStatus::Submitting => "Making Prediction...",
            FormStatus::TeamsLoading => "Loading Teams...",
            _ => "Predict Match",
        }
    }
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::view::testing::{prediction, FakeApi};

    async fn mounted(api: &Arc<FakeApi>) -> PredictionForm {
        let mut form = PredictionForm::new();
        form.mount(api);
        assert!(form.is_loading_teams());
        assert!(form.team_select().disabled);
        assert_eq!(form.team_select().placeholder, "Loading teams...");
        assert_eq!(form.submit_label(), "Loading Teams...");
        assert!(form.settle(|_| panic!("no prediction expected")).await);
        form
    }

    #[tokio::test]
    async fn test_mount_loads_paginated_teams() {
        let api = Arc::new(FakeApi::with_two_teams());
        let form = mounted(&api).await;
        assert_eq!(form.status(), &FormStatus::Ready);
        let select = form.opponent_select();
        assert!(!select.disabled);
        assert_eq!(select.placeholder, "Select opponent");
        assert_eq!(
            select.options.iter().map(|o| o.label.as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
        assert!(!form.submit_disabled());
    }

    #[tokio::test]
    async fn test_mount_tolerates_unexpected_team_shape() {
        let api = Arc::new(FakeApi::default());
        *api.teams_body.lock().unwrap() = json!({"detail": "Authentication required"});
        let form = mounted(&api).await;
        assert_eq!(form.status(), &FormStatus::Ready);
        assert!(form.teams().is_empty());
        assert!(form.submit_disabled());
    }

    #[tokio::test]
    async fn test_team_load_failure_shows_message() {
        let api = Arc::new(FakeApi::with_two_teams());
        *api.teams_error.lock().unwrap() = Some("database unavailable".to_string());
        let form = mounted(&api).await;
        assert_eq!(form.error(), Some("Failed to load teams"));
        assert!(form.teams().is_empty());
        assert!(form.submit_disabled());
    }

    #[tokio::test]
    async fn test_missing_fields_make_no_call() {
        let api = Arc::new(FakeApi::with_two_teams());
        let mut form = mounted(&api).await;
        let calls = api.total_calls();

        form.select_team(Some(1));
        form.select_opponent(Some(2));
        assert_eq!(form.submit(&api), Err(FormError::MissingFields));
        assert_eq!(form.error(), Some("Please fill in all fields"));

        form.set_match_date_str("2024-05-01").unwrap();
        form.select_opponent(None);
        assert_eq!(form.submit(&api), Err(FormError::MissingFields));

        assert!(!form.settle(|_| panic!("no prediction expected")).await);
        assert_eq!(api.total_calls(), calls);
    }

    #[tokio::test]
    async fn test_same_team_makes_no_call() {
        let api = Arc::new(FakeApi::with_two_teams());
        let mut form = mounted(&api).await;

        form.select_team(Some(2));
        form.select_opponent(Some(2));
        form.set_match_date(NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(form.submit(&api), Err(FormError::SameTeams));
        assert_eq!(form.error(), Some("Team and opponent must be different"));
        assert_eq!(api.calls_to("predict"), 0);
    }

    #[tokio::test]
    async fn test_successful_submission_resets_fields() {
        let api = Arc::new(FakeApi::with_two_teams());
        *api.prediction.lock().unwrap() = Some(prediction(5, "A", "B"));
        let mut form = mounted(&api).await;

        form.select_team(Some(1));
        form.select_opponent(Some(2));
        form.set_match_date_str("2024-05-01").unwrap();
        form.set_venue(Venue::Home);
        form.submit(&api).unwrap();
        assert_eq!(form.status(), &FormStatus::Submitting);
        assert_eq!(form.submit_label(), "Making Prediction...");
        assert!(form.submit_disabled());
        assert_eq!(form.submit(&api), Err(FormError::Busy));

        let mut received = Vec::new();
        assert!(form.settle(|p| received.push(p)).await);

        assert_eq!(received.len(), 1);
        assert_eq!(received[0].id, 5);
        assert_eq!(
            api.predict_requests.lock().unwrap().as_slice(),
            &[PredictionRequest {
                team_id: 1,
                opponent_id: 2,
                venue: Venue::Home,
                match_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            }]
        );
        assert_eq!(api.calls_to("predict"), 1);
        assert_eq!(form.team(), None);
        assert_eq!(form.opponent(), None);
        assert_eq!(form.match_date(), None);
        assert_eq!(form.venue(), Venue::Home);
        assert_eq!(form.status(), &FormStatus::Ready);
    }

    #[tokio::test]
    async fn test_away_venue_resets_to_home() {
        let api = Arc::new(FakeApi::with_two_teams());
        *api.prediction.lock().unwrap() = Some(prediction(6, "B", "A"));
        let mut form = mounted(&api).await;

        form.select_team(Some(2));
        form.select_opponent(Some(1));
        form.set_match_date_str("2024-05-04").unwrap();
        form.set_venue(Venue::Away);
        form.submit(&api).unwrap();
        form.settle(|_| {}).await;

        assert_eq!(api.predict_requests.lock().unwrap()[0].venue, Venue::Away);
        assert_eq!(form.venue(), Venue::Home);
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_fields() {
        let api = Arc::new(FakeApi::with_two_teams());
        *api.predict_error.lock().unwrap() =
            Some("Unable to make prediction. Model may not be trained.".to_string());
        let mut form = mounted(&api).await;

        form.select_team(Some(1));
        form.select_opponent(Some(2));
        form.set_match_date_str("2024-05-01").unwrap();
        form.set_venue(Venue::Away);
        form.submit(&api).unwrap();
        form.settle(|_| panic!("no prediction expected")).await;

        assert_eq!(
            form.error(),
            Some("Unable to make prediction. Model may not be trained.")
        );
        assert_eq!(form.team(), Some(1));
        assert_eq!(form.opponent(), Some(2));
        assert_eq!(form.match_date(), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(form.venue(), Venue::Away);
    }

    #[tokio::test]
    async fn test_backend_failure_without_message_uses_fallback() {
        let api = Arc::new(FakeApi::with_two_teams());
        let mut form = mounted(&api).await;

        form.select_team(Some(1));
        form.select_opponent(Some(2));
        form.set_match_date_str("2024-05-01").unwrap();
        form.submit(&api).unwrap();
        form.settle(|_| {}).await;

        assert_eq!(form.error(), Some("Failed to make prediction"));
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_prediction() {
        let api = Arc::new(FakeApi::with_two_teams());
        *api.prediction.lock().unwrap() = Some(prediction(7, "A", "B"));
        let mut form = mounted(&api).await;

        form.select_team(Some(1));
        form.select_opponent(Some(2));
        form.set_match_date_str("2024-05-01").unwrap();
        form.submit(&api).unwrap();
        form.cancel();

        assert_eq!(form.status(), &FormStatus::Ready);
        assert!(!form.settle(|_| panic!("cancelled")).await);
        assert_eq!(form.team(), Some(1));
    }

    #[test]
    fn test_bad_date_input_keeps_previous_value() {
        let mut form = PredictionForm::new();
        form.set_match_date_str("2024-05-01").unwrap();
        assert!(form.set_match_date_str("01/05/2024").is_err());
        assert_eq!(form.match_date(), NaiveDate::from_ymd_opt(2024, 5, 1));
        form.set_match_date_str("").unwrap();
        assert_eq!(form.match_date(), None);
    }
}
