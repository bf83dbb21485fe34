use standings_forecast::{Championship, EventKind, ParticipantId, ResultsClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> standings_forecast::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let season = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);

    let client = ResultsClient::new();
    let mut championship = Championship::new(client.fetch_season(season).await?);

    let next = championship
        .snapshot()
        .rounds
        .iter()
        .find(|round| !championship.snapshot().is_resolved(round.number, EventKind::Race))
        .map(|round| round.number);
    if let Some(round) = next {
        let underdog = championship
            .snapshot()
            .participants
            .get(5)
            .map(|p| p.id.clone())
            .unwrap_or_else(|| ParticipantId::from("albon"));
        let change = championship.set_prediction(round, EventKind::Race, &underdog, Some(1))?;
        println!("Round {round}: {change:?}");
    }

    for row in championship.compute_standings() {
        let change = row
            .position_change
            .map_or_else(|| "new".to_owned(), |change| format!("{change:+}"));
        println!(
            "{:>2}. {:<24} {:>4} ({change}) gap {}",
            row.position,
            row.participant.name,
            row.points.total(),
            row.gap_to_leader
        );
    }

    // Refreshing again keeps the prediction even if the fetch fails.
    let refreshed = client.fetch_season(season).await;
    if let Err(err) = championship.apply_refresh(refreshed) {
        eprintln!("refresh failed: {err}");
    }
    Ok(())
}
