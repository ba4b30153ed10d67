//! Sandbox filesystem helpers.
//!
//! Zellij plugins see the host filesystem under `/host`; everything the plugin
//! reads or writes on disk (theme files, trace exports) goes through here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
