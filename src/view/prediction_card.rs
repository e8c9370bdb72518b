use std::fmt::{self, Display, Formatter};

use crate::format::{format_date, format_percentage, result_color, result_text};
use crate::model::PredictionResponse;

/// One horizontal probability bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityBar {
    pub label: &'static str,
    pub fill_class: &'static str,
    /// Bar width as a percentage of the track, within `0..=100`.
    pub width_percent: f64,
    pub text: String,
}

impl ProbabilityBar {
    fn new(label: &'static str, fill_class: &'static str, probability: f64) -> Self {
        Self {
            label,
            fill_class,
            width_percent: (probability * 100.0).clamp(0.0, 100.0),
            text: format_percentage(probability),
        }
    }
}

/// Display model of a single prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCard {
    pub title: String,
    pub result_label: &'static str,
    pub result_class: &'static str,
    pub date: String,
    pub venue: &'static str,
    pub probabilities: [ProbabilityBar; 3],
    pub confidence: String,
}

impl From<&PredictionResponse> for PredictionCard {
    fn from(prediction: &PredictionResponse) -> Self {
        Self {
            title: format!("{} vs {}", prediction.team, prediction.opponent),
            result_label: result_text(prediction.predicted_result),
            result_class: result_color(prediction.predicted_result),
            date: format_date(&prediction.match_date),
            venue: prediction.venue.label(),
            probabilities: [
                ProbabilityBar::new("Win", "bg-green-500", prediction.win_probability),
                ProbabilityBar::new("Draw", "bg-yellow-500", prediction.draw_probability),
                ProbabilityBar::new("Loss", "bg-red-500", prediction.loss_probability),
            ],
            confidence: format_percentage(prediction.confidence),
        }
    }
}

const BAR_WIDTH: usize = 20;

impl Display for PredictionCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title, self.result_label)?;
        writeln!(f, "Date: {}  Venue: {}", self.date, self.venue)?;
        for bar in &self.probabilities {
            let filled = ((bar.width_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
            writeln!(
                f,
                "{:<5} {}{} {:>6}",
                bar.label,
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled),
                bar.text
            )?;
        }
        write!(f, "Confidence: {}", self.confidence)
    }
}
