use tracing::{debug, instrument};

use super::wire::{Response, StandingsData};
use crate::error::Result;
use crate::model::{Participant, ParticipantId};
use crate::provider::{self, parse_points, PAGE_LIMIT};

#[instrument(skip(client))]
pub(crate) async fn get_standings(
    client: &reqwest::Client,
    base_url: &str,
    season: u16,
) -> Result<Vec<Participant>> {
    let url = format!("{base_url}/{season}/driverStandings.json?limit={PAGE_LIMIT}");
    let page: Response<StandingsData> = provider::get_json(client, &url).await?;
    let participants = parse_standings(page.data.table)?;
    debug!(count = participants.len(), season, "parsed standings");
    Ok(participants)
}

/// Before the first round the provider returns no standings list at all.
pub(crate) fn parse_standings(data: StandingsData) -> Result<Vec<Participant>> {
    data.standings_table
        .standings_lists
        .into_iter()
        .next()
        .map(|list| list.driver_standings)
        .unwrap_or_default()
        .into_iter()
        .map(|standing| -> Result<Participant> {
            let position = standing.position.as_deref().and_then(|p| p.parse().ok());
            Ok(Participant {
                id: ParticipantId::from(standing.driver.driver_id),
                name: format!("{} {}", standing.driver.given_name, standing.driver.family_name),
                position,
                points: parse_points(&standing.points)?,
            })
        })
        .collect()
}
