//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod classes;
pub mod config;
pub mod dashboard;
pub mod forms;
pub mod ids;
pub mod selection;
pub mod session;
pub mod store;
pub mod styles;
