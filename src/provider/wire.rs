//! Response shapes of the Ergast-compatible JSON API.

use serde::de::IgnoredAny;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Response<T> {
    #[serde(rename = "MRData")]
    pub data: MrData<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MrData<T> {
    pub total: String,
    #[serde(flatten)]
    pub table: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RaceTableData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Race {
    pub round: String,
    pub race_name: String,
    pub date: Option<String>,
    /// Only present on sprint weekends.
    #[serde(rename = "Sprint")]
    pub sprint: Option<IgnoredAny>,
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultRow>,
    #[serde(rename = "SprintResults", default)]
    pub sprint_results: Vec<ResultRow>,
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<QualifyingRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultRow {
    pub position_text: String,
    pub points: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QualifyingRow {
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Driver {
    pub driver_id: String,
    pub given_name: String,
    pub family_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StandingsData {
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StandingsList {
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DriverStanding {
    pub position: Option<String>,
    pub points: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
}
