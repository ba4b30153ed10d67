//! Wire format of the OMDb JSON responses.
//!
//! OMDb answers every request with HTTP 200 and a JSON object carrying a
//! `"Response"` discriminator (`"True"` / `"False"`). Failure objects only
//! hold an `"Error"` message, so every payload field is defaulted. All values,
//! including numbers, arrive as strings and use `"N/A"` for unknowns.

use crate::domain::movie::{MovieDetail, SearchResultItem};
use chrono::NaiveDate;
use serde::Deserialize;

/// Placeholder the service uses for unknown values.
const NOT_AVAILABLE: &str = "N/A";

/// Format of the `Released` field, e.g. `22 Nov 2013`.
const RELEASED_FORMAT: &str = "%d %b %Y";

/// Body of a title search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// One element of `SearchEnvelope::search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Body of a lookup-by-id response.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
}

/// Whether an envelope's `"Response"` discriminator reports success.
#[must_use]
pub fn is_success(response: &str) -> bool {
    response.eq_ignore_ascii_case("true")
}

impl From<SearchHit> for SearchResultItem {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.imdb_id,
            title: hit.title,
            year: hit.year,
            poster_url: known(hit.poster),
        }
    }
}

impl From<DetailEnvelope> for MovieDetail {
    fn from(body: DetailEnvelope) -> Self {
        Self {
            runtime_minutes: parse_runtime(&body.runtime),
            imdb_rating: parse_rating(&body.imdb_rating),
            release_date: parse_released(&body.released),
            id: body.imdb_id,
            title: body.title,
            year: body.year,
            poster_url: known(body.poster),
            plot: body.plot,
            released: body.released,
            actors: body.actors,
            director: body.director,
            genre: body.genre,
        }
    }
}

fn known(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Leading integer of a runtime string such as `"148 min"`.
fn parse_runtime(raw: &str) -> Option<u32> {
    raw.split_whitespace().next()?.parse().ok()
}

fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && (0.0..=10.0).contains(r))
}

fn parse_released(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), RELEASED_FORMAT).ok()
}
