//! Telegram Mini App profile viewer.
//!
//! This crate is intentionally a stub by default so it builds (and its unit
//! tests run) on native targets without a wasm toolchain.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod launch;
pub mod logbuf;
pub mod ui_model;
pub mod user;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
