//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) never talks to Zellij itself. It
//! returns a `Vec<Action>` and the plugin shim executes them in order, which
//! keeps every state transition testable without a running session.

use super::token::RequestToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a title search. The token travels in the request context so the
    /// result can be matched against the query that is current when it lands.
    FetchSearch {
        token: RequestToken,
        url: String,
    },

    /// Issues a lookup of one movie by id.
    FetchDetail {
        token: RequestToken,
        id: String,
        url: String,
    },

    /// Renames the plugin pane (`Movie | {title}` or the default title).
    SetPaneTitle(String),
}
