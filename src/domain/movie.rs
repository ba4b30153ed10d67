//! Movie domain model.
//!
//! This module defines the three movie shapes the plugin works with:
//!
//! - [`SearchResultItem`]: one row of a title search, held while its query is current
//! - [`MovieDetail`]: the full record for a selected movie
//! - [`WatchedMovieRecord`]: an immutable watched-list entry carrying the user's rating
//!
//! Records are only ever derived from a loaded [`MovieDetail`] plus a
//! validated [`UserRating`].

use super::error::{PopcornError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest rating a user can give.
pub const MIN_USER_RATING: u8 = 1;

/// Highest rating a user can give.
pub const MAX_USER_RATING: u8 = 10;

/// A single search hit returned by the title search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// External (IMDb) identifier, e.g. `tt2294629`.
    pub id: String,
    pub title: String,
    /// Release year as reported by the service (may be a range like `2011–2019`).
    pub year: String,
    pub poster_url: Option<String>,
}

/// The full metadata record for one movie.
///
/// A superset of [`SearchResultItem`]. Numeric fields are optional because
/// the service reports unknown values as `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub runtime_minutes: Option<u32>,
    /// IMDb rating on a 0–10 scale.
    pub imdb_rating: Option<f64>,
    pub plot: String,
    /// Parsed release date, `None` when the service has none.
    pub release_date: Option<NaiveDate>,
    /// Release date text exactly as the service sent it.
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

impl MovieDetail {
    /// Formats the release line shown under the title: `22 Nov 2013 • 102 min`.
    ///
    /// Falls back to the raw release text when the date could not be parsed,
    /// and omits whichever half is unknown.
    #[must_use]
    pub fn release_line(&self) -> String {
        let date = self.release_date.map_or_else(
            || self.released.clone(),
            |d| d.format("%d %b %Y").to_string(),
        );
        let runtime = self.runtime_minutes.map(|m| format!("{m} min"));

        match (date.is_empty() || date == "N/A", runtime) {
            (false, Some(rt)) => format!("{date} • {rt}"),
            (false, None) => date,
            (true, Some(rt)) => rt,
            (true, None) => String::new(),
        }
    }
}

/// A user-supplied rating between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UserRating(u8);

impl UserRating {
    /// The lowest rating; where stepping up starts from.
    pub const LOWEST: Self = Self(MIN_USER_RATING);

    /// Validates and wraps a rating.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::InvalidRating`] when `value` is outside `1..=10`.
    ///
    /// # Examples
    ///
    /// ```
    /// use popcorn::domain::UserRating;
    ///
    /// assert_eq!(UserRating::new(8).unwrap().value(), 8);
    /// assert!(UserRating::new(0).is_err());
    /// assert!(UserRating::new(11).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value >= MIN_USER_RATING && value <= MAX_USER_RATING {
            Ok(Self(value))
        } else {
            Err(PopcornError::InvalidRating(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// One step up, saturating at 10.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 >= MAX_USER_RATING {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// One step down, saturating at 1.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 <= MIN_USER_RATING {
            self
        } else {
            Self(self.0 - 1)
        }
    }
}

impl TryFrom<u8> for UserRating {
    type Error = PopcornError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<UserRating> for u8 {
    fn from(rating: UserRating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for UserRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry in the watched list.
///
/// Created only through [`WatchedMovieRecord::from_detail`]; there is no
/// way to change a record afterwards, only to remove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovieRecord {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: Option<String>,
    pub imdb_rating: Option<f64>,
    pub runtime_minutes: Option<u32>,
    pub user_rating: UserRating,
}

impl WatchedMovieRecord {
    /// Derives a watched record from a loaded detail and the chosen rating.
    #[must_use]
    pub fn from_detail(detail: &MovieDetail, user_rating: UserRating) -> Self {
        Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            imdb_rating: detail.imdb_rating,
            runtime_minutes: detail.runtime_minutes,
            user_rating,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_steps_saturate_at_bounds() {
        let top = UserRating::new(10).unwrap();
        assert_eq!(top.increment(), top);
        let bottom = UserRating::new(1).unwrap();
        assert_eq!(bottom.decrement(), bottom);
        assert_eq!(UserRating::new(5).unwrap().increment().value(), 6);
    }

    #[test]
    fn rating_deserialization_is_validated() {
        assert!(serde_json::from_str::<UserRating>("7").is_ok());
        assert!(serde_json::from_str::<UserRating>("0").is_err());
    }

    #[test]
    fn record_copies_detail_fields() {
        let detail = fixtures::detail("tt2294629", "Frozen");
        let record = WatchedMovieRecord::from_detail(&detail, UserRating::new(8).unwrap());
        assert_eq!(record.id, "tt2294629");
        assert_eq!(record.title, "Frozen");
        assert_eq!(record.runtime_minutes, Some(102));
        assert_eq!(record.imdb_rating, Some(7.4));
        assert_eq!(record.user_rating.value(), 8);
    }

    #[test]
    fn release_line_combines_date_and_runtime() {
        let mut detail = fixtures::detail("tt2294629", "Frozen");
        assert_eq!(detail.release_line(), "27 Nov 2013 • 102 min");

        detail.runtime_minutes = None;
        assert_eq!(detail.release_line(), "27 Nov 2013");

        detail.release_date = None;
        detail.released = "N/A".to_string();
        detail.runtime_minutes = Some(90);
        assert_eq!(detail.release_line(), "90 min");
    }
}
