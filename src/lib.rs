//! Client and headless view state for a football match outcome prediction service.
//!
//! [`PredictorClient`] talks to the backend's REST API. The [`view`] module
//! holds the state behind the prediction form, the prediction cards, the team
//! statistics panel and the model performance panel.

pub use api::PredictorApi;
pub use client::PredictorClient;
pub use config::ClientConfig;
pub use error::{PredictorError, Result};
pub use model::*;
pub use request::RequestHandle;

mod api;
mod client;
pub mod config;
mod endpoints;
mod error;
pub mod format;
mod model;
mod request;
pub mod view;
