//! Storage layer for the watched list.
//!
//! The watched list is held in memory only; it does not survive the plugin
//! pane being closed.
//!
//! # Modules
//!
//! - `backend`: [`WatchlistStore`] trait
//! - `memory`: in-memory implementation
//! - `summary`: count and mean statistics over the list

pub mod backend;
pub mod memory;
pub mod summary;

pub use backend::WatchlistStore;
pub use memory::MemoryWatchlist;
pub use summary::WatchlistSummary;
