//! Interpretation of completed web requests.
//!
//! The plugin runtime hands over the raw HTTP status and body of every
//! completed request. These functions turn them into domain values or a
//! [`FetchError`] describing which of the failure kinds occurred:
//!
//! | Condition                              | Result                    |
//! |----------------------------------------|---------------------------|
//! | status outside `200..300`              | `FetchError::Http`        |
//! | body is not the documented JSON shape  | `FetchError::Decode`      |
//! | `"Response": "False"`                  | `FetchError::NotFound`    |
//! | `"Response": "True"`                   | `Ok(..)`                  |

use super::models::{is_success, DetailEnvelope, SearchEnvelope};
use crate::domain::error::FetchError;
use crate::domain::movie::{MovieDetail, SearchResultItem};

/// Message used when the service reports failure without saying why.
const UNSPECIFIED_ERROR: &str = "no result";

/// Decodes the response of a title search.
///
/// # Errors
///
/// See the module table.
///
/// # Examples
///
/// ```
/// use popcorn::api::decode_search;
///
/// let body = br#"{"Search":[{"Title":"Frozen","Year":"2013","imdbID":"tt2294629","Type":"movie","Poster":"N/A"}],"totalResults":"1","Response":"True"}"#;
/// let items = decode_search(200, body).unwrap();
/// assert_eq!(items[0].title, "Frozen");
/// ```
pub fn decode_search(status: u16, body: &[u8]) -> Result<Vec<SearchResultItem>, FetchError> {
    check_status(status, body)?;

    let envelope: SearchEnvelope =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if !is_success(&envelope.response) {
        return Err(FetchError::NotFound {
            message: envelope.error.unwrap_or_else(|| UNSPECIFIED_ERROR.to_string()),
        });
    }

    Ok(envelope.search.into_iter().map(SearchResultItem::from).collect())
}

/// Decodes the response of a lookup by id.
///
/// # Errors
///
/// See the module table.
pub fn decode_detail(status: u16, body: &[u8]) -> Result<MovieDetail, FetchError> {
    check_status(status, body)?;

    let envelope: DetailEnvelope =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if !is_success(&envelope.response) {
        return Err(FetchError::NotFound {
            message: envelope.error.unwrap_or_else(|| UNSPECIFIED_ERROR.to_string()),
        });
    }

    Ok(MovieDetail::from(envelope))
}

fn check_status(status: u16, body: &[u8]) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    // No status at all means no response arrived; the body holds the reason.
    if status == 0 {
        return Err(FetchError::Transport(String::from_utf8_lossy(body).into_owned()));
    }

    Err(FetchError::Http { status })
}
