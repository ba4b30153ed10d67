//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`plugin.rs`) and the domain, storage and API
//! layers. Data flows one way:
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → state mutations → Actions
//!         ↑                                                            ↓
//!         └────────────── web_request / rename_plugin_pane ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`]: generation-counter tokens that make late responses harmless
//! - [`search`]: query, results, loading and error state
//! - [`detail`]: selected movie, pending rating, watched status
//! - [`modes`]: input mode and pane focus
//! - [`actions`]: side effects emitted by the handler
//! - [`handler`]: event processing and state transitions
//! - [`state`]: the session state container and view model computation

pub mod actions;
pub mod detail;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;
pub mod token;

pub use actions::Action;
pub use detail::{DetailController, DetailState};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Pane};
pub use search::{SearchController, DEFAULT_MIN_QUERY_LEN, SEARCH_FAILED_MESSAGE};
pub use state::{AppState, DEFAULT_PANE_TITLE};
pub use token::RequestToken;
