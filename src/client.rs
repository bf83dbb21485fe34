use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::*;
use crate::provider;

/// Public Ergast-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

/// Fetches season snapshots from an Ergast-compatible results API.
///
/// `ResultsClient` wraps a [`reqwest::Client`] and exposes one method per
/// snapshot component, plus [`ResultsClient::fetch_season`] for all of them.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> standings_forecast::Result<()> {
/// use standings_forecast::{Championship, ResultsClient};
///
/// let client = ResultsClient::new();
/// let snapshot = client.fetch_season(2024).await?;
/// let championship = Championship::new(snapshot);
/// println!("{} rounds", championship.snapshot().rounds.len());
/// # Ok(())
/// # }
/// ```
pub struct ResultsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResultsClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Point the client at another Ergast-compatible host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the season calendar.
    #[instrument(skip(self))]
    pub async fn fetch_schedule(&self, season: u16) -> Result<Vec<Round>> {
        provider::schedule::get_schedule(&self.http, &self.base_url, season).await
    }

    /// Fetch the current drivers' championship.
    #[instrument(skip(self))]
    pub async fn fetch_standings(&self, season: u16) -> Result<Vec<Participant>> {
        provider::standings::get_standings(&self.http, &self.base_url, season).await
    }

    /// Fetch every classification of one event kind, keyed by round.
    #[instrument(skip(self))]
    pub async fn fetch_results(
        &self,
        season: u16,
        kind: EventKind,
    ) -> Result<BTreeMap<u32, EventResults>> {
        provider::results::get_results(&self.http, &self.base_url, season, kind).await
    }

    /// Fetch published qualifying orders for the main event, keyed by round.
    #[instrument(skip(self))]
    pub async fn fetch_qualifying(&self, season: u16) -> Result<BTreeMap<u32, QualifyingOrder>> {
        provider::qualifying::get_qualifying(&self.http, &self.base_url, season).await
    }

    /// Fetch a complete snapshot. Fails as a whole if any part fails.
    #[instrument(skip(self))]
    pub async fn fetch_season(&self, season: u16) -> Result<SeasonSnapshot> {
        let (rounds, participants, race, sprint, qualifying) = tokio::try_join!(
            self.fetch_schedule(season),
            self.fetch_standings(season),
            self.fetch_results(season, EventKind::Race),
            self.fetch_results(season, EventKind::Sprint),
            self.fetch_qualifying(season),
        )?;
        debug!(
            rounds = rounds.len(),
            participants = participants.len(),
            races = race.len(),
            sprints = sprint.len(),
            "fetched season"
        );

        Ok(SeasonSnapshot {
            season,
            rounds,
            participants,
            results: ByEvent { race, sprint },
            qualifying: ByEvent {
                race: qualifying,
                sprint: BTreeMap::new(),
            },
        })
    }
}

impl Default for ResultsClient {
    fn default() -> Self {
        Self::new()
    }
}
