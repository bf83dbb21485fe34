//! Projected championship standings from actual results and speculative
//! finishing positions.
//!
//! A [`SeasonSnapshot`] holds what has happened so far. A [`Championship`]
//! pairs it with the user's [`PredictionStore`] and [`ColumnVisibility`]
//! state and answers standings and per-cell queries. [`ResultsClient`]
//! loads snapshots from an Ergast-compatible API.

pub mod championship;
pub mod columns;
pub mod error;
pub mod model;
pub mod predictions;
pub mod resolver;
pub mod scoring;
pub mod totals;

mod client;
mod provider;

#[cfg(test)]
mod test_fixtures;

pub use championship::{CellState, Championship};
pub use client::{ResultsClient, DEFAULT_BASE_URL};
pub use columns::ColumnVisibility;
pub use error::{ForecastError, Result};
pub use model::*;
pub use predictions::{PredictionState, PredictionStore};
pub use provider::PAGE_LIMIT;
pub use resolver::{resolve, Outcome};
pub use scoring::points_for_position;
pub use totals::{standings, total_points, PointsBreakdown, Standing};
