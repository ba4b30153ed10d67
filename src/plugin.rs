//! Zellij plugin wrapper.
//!
//! The thin layer between the popcorn library and the Zellij host: it turns
//! keys and web request results into library [`Event`]s and library
//! [`Action`]s into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`, request
//!    permissions, subscribe
//! 2. **Update**: map the Zellij event, run `handle_event`, execute actions
//! 3. **Render**: call the library render function
//!
//! # Permissions
//!
//! - `WebAccess`: every `web_request` to the movie API
//! - `ChangeApplicationState`: `rename_plugin_pane`, which the host gates
//!   behind it. Titles are only set once the grant arrives.
//!
//! Without `WebAccess` no search can complete and each one shows the error
//! banner.
//!
//! # Requests
//!
//! Every `web_request` carries a [`RequestContext`] map. The result comes back
//! with the same map, which routes the body to the search or detail decoder
//! and restores the token the request was issued under.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! While typing:
//! - characters: Edit the query
//! - `Enter`: Jump to the results
//! - `Esc`: Close the open movie, then stop typing
//! - `Tab`: Focus the watched list
//! - `Ctrl+u`: Clear the query
//!
//! Otherwise:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Open or close the highlighted movie
//! - `/`: Type a query
//! - `1`-`9`, `0`: Rate 1-9, 10
//! - `+` / `-`: Adjust the rating
//! - `a`: Add the open movie to the watched list
//! - `d` / `x`: Remove the highlighted watched movie
//! - `[` / `]`: Collapse the results / watched box
//! - `Tab`: Switch box
//! - `q`: Hide the plugin

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use popcorn::api::{decode_detail, decode_search, RequestContext};
use popcorn::app::DEFAULT_PANE_TITLE;
use popcorn::{handle_event, Action, Config, Event, InputMode, Pane};

pub struct State {
    app: popcorn::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: popcorn::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = popcorn::observability::init_tracing(&config) {
            eprintln!("popcorn: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = popcorn::initialize(&config);
        if config.api_key.is_none() {
            tracing::warn!("no api_key configured; searches will fail");
        }

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match permissions {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted");
                        rename_plugin_pane(get_plugin_ids().plugin_id, DEFAULT_PANE_TITLE);
                        return false;
                    }
                    PermissionStatus::Denied => Event::PermissionsDenied,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        popcorn::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') => Some(Event::ClearQuery),
                _ => None,
            };
        }

        Some(match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Event::FocusResults,
                BareKey::Esc => Event::Escape,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Tab => Event::SwitchPane,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::Escape,
                BareKey::Tab => Event::SwitchPane,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('0') => Event::SetRating(10),
                BareKey::Char(c @ '1'..='9') => Event::SetRating(c as u8 - b'0'),
                BareKey::Char('+' | '=') => Event::RatingUp,
                BareKey::Char('-') => Event::RatingDown,
                BareKey::Char('a') => Event::AddToWatchlist,
                BareKey::Char('d' | 'x') => Event::RemoveWatched,
                BareKey::Char('[') => Event::TogglePanel(Pane::Results),
                BareKey::Char(']') => Event::TogglePanel(Pane::Watchlist),
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    /// Routes a response to the decoder named by its context.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request) = RequestContext::from_map(context) else {
            tracing::warn!(status, ?context, "dropping response with unknown context");
            return None;
        };
        tracing::debug!(status, body_len = body.len(), request = ?request, "web request result");

        Some(match request {
            RequestContext::Search { token } => Event::SearchCompleted {
                token,
                outcome: decode_search(status, body),
            },
            RequestContext::Detail { token, .. } => Event::DetailCompleted {
                token,
                outcome: decode_detail(status, body),
            },
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchSearch { token, url } => {
                let context = RequestContext::Search { token: *token };
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context.to_map());
            }
            Action::FetchDetail { token, id, url } => {
                let context = RequestContext::Detail {
                    token: *token,
                    id: id.clone(),
                };
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context.to_map());
            }
            Action::SetPaneTitle(title) => {
                rename_plugin_pane(get_plugin_ids().plugin_id, title);
            }
        }
    }
}
