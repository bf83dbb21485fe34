use std::collections::BTreeMap;

use tracing::{debug, instrument};

use super::wire::{Race, ResultRow};
use crate::error::Result;
use crate::model::{EventKind, EventResults, Finish, ParticipantId, ResultEntry};
use crate::provider::{self, parse_points};

#[instrument(skip(client))]
pub(crate) async fn get_results(
    client: &reqwest::Client,
    base_url: &str,
    season: u16,
    kind: EventKind,
) -> Result<BTreeMap<u32, EventResults>> {
    let path = match kind {
        EventKind::Race => format!("{season}/results"),
        EventKind::Sprint => format!("{season}/sprint"),
    };
    let races = provider::get_races(client, base_url, &path).await?;
    let results = parse_results(races, kind)?;
    debug!(rounds = results.len(), season, %kind, "parsed results");
    Ok(results)
}

/// Rows of a race split across pages are merged under the same round.
pub(crate) fn parse_results(
    races: Vec<Race>,
    kind: EventKind,
) -> Result<BTreeMap<u32, EventResults>> {
    let mut results: BTreeMap<u32, EventResults> = BTreeMap::new();
    for race in races {
        let round = race.round.parse()?;
        let rows = match kind {
            EventKind::Race => race.results,
            EventKind::Sprint => race.sprint_results,
        };
        let classification = results.entry(round).or_default();
        for row in rows {
            let (id, entry) = parse_row(row)?;
            classification.insert(id, entry);
        }
    }
    Ok(results)
}

fn parse_row(row: ResultRow) -> Result<(ParticipantId, ResultEntry)> {
    Ok((
        ParticipantId::from(row.driver.driver_id),
        ResultEntry {
            finish: Finish::from_position_text(&row.position_text),
            points: parse_points(&row.points)?,
        },
    ))
}
