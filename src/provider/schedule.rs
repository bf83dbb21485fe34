use chrono::NaiveDate;
use tracing::{debug, instrument};

use super::wire::Race;
use crate::error::Result;
use crate::model::Round;
use crate::provider;

pub(crate) const RACE_DATE_FORMAT: &str = "%Y-%m-%d";

#[instrument(skip(client))]
pub(crate) async fn get_schedule(
    client: &reqwest::Client,
    base_url: &str,
    season: u16,
) -> Result<Vec<Round>> {
    let races = provider::get_races(client, base_url, &season.to_string()).await?;
    let rounds = parse_schedule(races)?;
    debug!(count = rounds.len(), season, "parsed schedule");
    Ok(rounds)
}

pub(crate) fn parse_schedule(races: Vec<Race>) -> Result<Vec<Round>> {
    let mut rounds = races
        .into_iter()
        .map(|race| -> Result<Round> {
            let date = race
                .date
                .as_deref()
                .map(|date| NaiveDate::parse_from_str(date, RACE_DATE_FORMAT))
                .transpose()?;
            Ok(Round {
                number: race.round.parse()?,
                name: race.race_name,
                date,
                has_sprint: race.sprint.is_some(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    rounds.sort_by_key(|round| round.number);
    rounds.dedup_by_key(|round| round.number);
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use crate::provider::decode;
    use crate::provider::wire::{RaceTableData, Response};

    const SCHEDULE: &str = r#"{"MRData":{"limit":"100","offset":"0","total":"3","RaceTable":{"season":"2024","Races":[
        {"season":"2024","round":"5","raceName":"Chinese Grand Prix","date":"2024-04-21","time":"07:00:00Z",
         "Sprint":{"date":"2024-04-20","time":"03:00:00Z"}},
        {"season":"2024","round":"1","raceName":"Bahrain Grand Prix","date":"2024-03-02"},
        {"season":"2024","round":"2","raceName":"Saudi Arabian Grand Prix"}
    ]}}}"#;

    #[test]
    fn test_parse_schedule() {
        let page: Response<RaceTableData> = decode("schedule", SCHEDULE).unwrap();
        assert_eq!(page.data.total, "3");

        let rounds = parse_schedule(page.data.table.race_table.races).unwrap();

        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0].number, 1);
        assert_eq!(rounds[0].name, "Bahrain Grand Prix");
        assert_eq!(rounds[0].date, NaiveDate::from_ymd_opt(2024, 3, 2));
        assert!(!rounds[0].has_sprint);
        assert_eq!(rounds[1].date, None);
        assert_eq!(rounds[2].number, 5);
        assert!(rounds[2].has_sprint);
    }

    #[test]
    fn test_parse_schedule_bad_date() {
        let body = SCHEDULE.replace("2024-03-02", "March 2nd");
        let page: Response<RaceTableData> = decode("schedule", &body).unwrap();

        let err = parse_schedule(page.data.table.race_table.races);

        assert!(matches!(err, Err(ForecastError::DateParse(_))));
    }
}
