pub(crate) mod qualifying;
pub(crate) mod results;
pub(crate) mod schedule;
pub(crate) mod standings;
mod wire;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ForecastError, Result};
use wire::{Race, RaceTableData, Response};

/// Rows requested per page from paginated endpoints.
pub const PAGE_LIMIT: u32 = 100;

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| ForecastError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ForecastError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| ForecastError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    decode(url, &body)
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ForecastError::Json {
        url: url.to_owned(),
        source: e,
    })
}

/// Walk every page of a race table endpoint. The same race may show up on
/// consecutive pages with its rows split between them.
pub(crate) async fn get_races(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
) -> Result<Vec<Race>> {
    let mut races = Vec::new();
    let mut offset = 0;
    loop {
        let url = format!("{base_url}/{path}.json?limit={PAGE_LIMIT}&offset={offset}");
        let page: Response<RaceTableData> = get_json(client, &url).await?;
        let total: u32 = page.data.total.parse()?;
        races.extend(page.data.table.race_table.races);

        offset += PAGE_LIMIT;
        if offset >= total {
            break;
        }
    }
    debug!(path, count = races.len(), "fetched race table");
    Ok(races)
}

/// Provider points are decimal strings; half points are truncated.
pub(crate) fn parse_points(text: &str) -> Result<u32> {
    let whole = text.split_once('.').map_or(text, |(whole, _)| whole);
    Ok(whole.trim().parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points("25").unwrap(), 25);
        assert_eq!(parse_points("0").unwrap(), 0);
        assert_eq!(parse_points("12.5").unwrap(), 12);
        assert!(matches!(parse_points("x"), Err(ForecastError::IntParse(_))));
    }

    #[test]
    fn test_decode_reports_url() {
        let err = decode::<Response<RaceTableData>>("https://example.test/2024.json", "[]")
            .unwrap_err();
        assert!(err.to_string().contains("https://example.test/2024.json"));
    }
}
