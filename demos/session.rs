use std::sync::Arc;

use chrono::{Duration, Local};
use tracing_subscriber::EnvFilter;

use match_predictor_client::view::{Page, Tab, TeamStatsView};
use match_predictor_client::{PredictorClient, Venue};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Arc::new(PredictorClient::new());
    println!("Using backend at {}", client.config().base_url());

    let mut page = Page::new(Arc::clone(&client));
    page.settle().await;

    let form = page.form_mut().unwrap();
    if let Some(error) = form.error() {
        println!("{error}");
        return;
    }
    let teams: Vec<(u32, String)> = form.teams().iter().map(|t| (t.id, t.name.clone())).collect();
    println!("Found {} teams", teams.len());
    let [(home, home_name), (away, away_name), ..] = teams.as_slice() else {
        println!("Need at least two teams to predict a match");
        return;
    };

    println!("Predicting {home_name} vs {away_name}");
    form.select_team(Some(*home));
    form.select_opponent(Some(*away));
    form.set_match_date(Some(Local::now().date_naive() + Duration::days(7)));
    form.set_venue(Venue::Home);
    if let Some(Err(e)) = page.submit_prediction() {
        println!("{e}");
        return;
    }
    page.settle().await;
    match page.form().and_then(|form| form.error()) {
        Some(error) => println!("{error}"),
        None => {
            for card in page.prediction_cards() {
                println!("{card}\n");
            }
        }
    }

    page.select_tab(Tab::Teams);
    page.settle().await;
    page.select_stats_team(Some(*home));
    page.settle().await;
    if let Some(panel) = page.team_stats() {
        match (panel.view(), panel.error(), panel.placeholder()) {
            (Some(view), _, _) => print_stats(&view),
            (None, Some(error), _) => println!("{error}"),
            (None, None, Some(text)) => println!("{text}"),
            _ => {}
        }
    }

    page.select_tab(Tab::Model);
    page.settle().await;
    if let Some(panel) = page.model_performance() {
        if let Some(error) = panel.error() {
            println!("{error}");
        }
        if let Some((title, hint)) = panel.placeholder() {
            println!("{title} {hint}");
        }
        for row in panel.rows() {
            let metrics: Vec<String> = row
                .metrics
                .iter()
                .map(|m| format!("{} {}", m.label, m.value))
                .collect();
            println!(
                "{} trained {}: {} ({} test matches)",
                row.model_version,
                row.trained_on,
                metrics.join(", "),
                row.test_set_size
            );
        }
    }
}

fn print_stats(view: &TeamStatsView) {
    println!("{}", view.team_name);
    for tile in &view.tiles {
        println!("  {:<15} {}", tile.label, tile.value);
    }
    println!("  Recent form     {}", view.form_string());
}
