#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Atomic Auth web UI.
//!
//! A Yew front-end of styled primitives composed into the sign-in,
//! password-recovery, and dashboard screens. Business logic is mocked.
//! DOM-free state lives in `core` and is tested natively; rendering is wasm32 only.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
