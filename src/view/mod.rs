//! Headless view state for the prediction front end.
//!
//! Each unit owns its own lifecycle: `mount` starts its initial fetch, user
//! actions start further requests, and `settle` waits for the outstanding
//! request and applies the result. Requests run as [`RequestHandle`]s, so
//! dropping a unit cancels whatever it still has in flight.
//!
//! [`RequestHandle`]: crate::RequestHandle

mod model_performance;
mod page;
mod prediction_card;
mod prediction_form;
mod team_stats;
#[cfg(test)]
pub(crate) mod testing;

pub use model_performance::*;
pub use page::*;
pub use prediction_card::*;
pub use prediction_form::*;
pub use team_stats::*;

use crate::model::Team;

/// One entry of a drop-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: u32,
    pub label: String,
}

/// A team drop-down: its placeholder entry, options and current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSelect {
    pub placeholder: &'static str,
    pub options: Vec<SelectOption>,
    pub selected: Option<u32>,
    pub disabled: bool,
}

pub(crate) fn team_options(teams: &[Team]) -> Vec<SelectOption> {
    teams
        .iter()
        .map(|team| SelectOption {
            value: team.id,
            label: team.name.clone(),
        })
        .collect()
}
