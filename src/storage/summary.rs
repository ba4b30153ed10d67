//! Aggregate statistics over the watched list.
//!
//! Means are taken over the records that carry the field; a movie whose IMDb
//! rating or runtime is unknown does not drag the average towards zero. When
//! no record carries a value the mean is `None` rather than a NaN.

use crate::domain::movie::WatchedMovieRecord;

/// Count and averages shown in the watched-list summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchlistSummary {
    pub count: usize,
    pub mean_imdb_rating: Option<f64>,
    pub mean_user_rating: Option<f64>,
    pub mean_runtime_minutes: Option<f64>,
}

impl WatchlistSummary {
    /// Computes the summary for a slice of records.
    ///
    /// # Examples
    ///
    /// ```
    /// use popcorn::storage::WatchlistSummary;
    ///
    /// let summary = WatchlistSummary::from_records(&[]);
    /// assert_eq!(summary.count, 0);
    /// assert_eq!(summary.mean_imdb_rating, None);
    /// ```
    #[must_use]
    pub fn from_records(records: &[WatchedMovieRecord]) -> Self {
        Self {
            count: records.len(),
            mean_imdb_rating: mean(records.iter().filter_map(|r| r.imdb_rating)),
            mean_user_rating: mean(records.iter().map(|r| f64::from(r.user_rating.value()))),
            mean_runtime_minutes: mean(
                records
                    .iter()
                    .filter_map(|r| r.runtime_minutes)
                    .map(f64::from),
            ),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::fixtures::record;

    fn approx(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("mean should be present");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn means_are_arithmetic_over_all_records() {
        let records = vec![record("tt1", 8.0, 9, 100), record("tt2", 6.0, 7, 120)];
        let summary = WatchlistSummary::from_records(&records);

        assert_eq!(summary.count, 2);
        approx(summary.mean_imdb_rating, 7.0);
        approx(summary.mean_user_rating, 8.0);
        approx(summary.mean_runtime_minutes, 110.0);
    }

    #[test]
    fn empty_list_has_no_means() {
        let summary = WatchlistSummary::from_records(&[]);
        assert_eq!(summary, WatchlistSummary::default());
    }

    #[test]
    fn unknown_fields_are_skipped_not_zeroed() {
        let mut unknown = record("tt2", 0.0, 4, 0);
        unknown.imdb_rating = None;
        unknown.runtime_minutes = None;
        let records = vec![record("tt1", 8.0, 10, 90), unknown];

        let summary = WatchlistSummary::from_records(&records);
        approx(summary.mean_imdb_rating, 8.0);
        approx(summary.mean_runtime_minutes, 90.0);
        approx(summary.mean_user_rating, 7.0);
    }
}
