use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, instrument};

use super::wire::Race;
use crate::error::Result;
use crate::model::{ParticipantId, QualifyingOrder};
use crate::provider;

#[instrument(skip(client))]
pub(crate) async fn get_qualifying(
    client: &reqwest::Client,
    base_url: &str,
    season: u16,
) -> Result<BTreeMap<u32, QualifyingOrder>> {
    let races = provider::get_races(client, base_url, &format!("{season}/qualifying")).await?;
    let qualifying = parse_qualifying(races)?;
    debug!(rounds = qualifying.len(), season, "parsed qualifying");
    Ok(qualifying)
}

pub(crate) fn parse_qualifying(races: Vec<Race>) -> Result<BTreeMap<u32, QualifyingOrder>> {
    let mut rows: BTreeMap<u32, Vec<(u32, ParticipantId)>> = BTreeMap::new();
    for race in races {
        let round = race.round.parse()?;
        let order = rows.entry(round).or_default();
        for row in race.qualifying_results {
            order.push((row.position.parse()?, ParticipantId::from(row.driver.driver_id)));
        }
    }

    Ok(rows
        .into_iter()
        .map(|(round, order)| {
            let order = order
                .into_iter()
                .sorted_by_key(|(position, _)| *position)
                .map(|(_, id)| id)
                .collect::<QualifyingOrder>();
            (round, order)
        })
        .collect())
}
