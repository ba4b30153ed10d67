//! Plugin binary.
//!
//! Built for `wasm32-wasip1` this registers [`plugin::State`] with Zellij.
//! Built natively it only prints a hint, so `cargo test` can compile the
//! whole workspace without the Zellij host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin;

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("popcorn is a Zellij plugin; build it with --target wasm32-wasip1 and load the .wasm from a layout");
}
