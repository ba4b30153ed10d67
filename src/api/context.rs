//! Request context carried through Zellij web requests.
//!
//! `web_request` accepts an arbitrary string map that Zellij hands back
//! untouched with the `WebRequestResult` event. The plugin uses it to remember
//! which controller issued the request and with which token, so that a
//! completion can be routed and staleness checked.

use crate::app::token::RequestToken;
use std::collections::BTreeMap;

const KIND_KEY: &str = "popcorn_request";
const TOKEN_KEY: &str = "token";
const ID_KEY: &str = "movie_id";

const KIND_SEARCH: &str = "search";
const KIND_DETAIL: &str = "detail";

/// Routing information for an outstanding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    Search {
        token: RequestToken,
    },
    Detail {
        token: RequestToken,
        id: String,
    },
}

impl RequestContext {
    /// Encodes the context as a Zellij request context map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        match self {
            Self::Search { token } => {
                map.insert(KIND_KEY.to_string(), KIND_SEARCH.to_string());
                map.insert(TOKEN_KEY.to_string(), token.to_string());
            }
            Self::Detail { token, id } => {
                map.insert(KIND_KEY.to_string(), KIND_DETAIL.to_string());
                map.insert(TOKEN_KEY.to_string(), token.to_string());
                map.insert(ID_KEY.to_string(), id.clone());
            }
        }
        map
    }

    /// Decodes a context map; `None` for requests this plugin did not issue.
    ///
    /// # Examples
    ///
    /// ```
    /// use popcorn::api::RequestContext;
    /// use std::collections::BTreeMap;
    ///
    /// assert_eq!(RequestContext::from_map(&BTreeMap::new()), None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let token = map.get(TOKEN_KEY)?.parse::<RequestToken>().ok()?;
        match map.get(KIND_KEY)?.as_str() {
            KIND_SEARCH => Some(Self::Search { token }),
            KIND_DETAIL => Some(Self::Detail {
                token,
                id: map.get(ID_KEY)?.clone(),
            }),
            _ => None,
        }
    }
}
