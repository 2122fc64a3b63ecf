//! # Backend module — HTTP access to the remote school API
//!
//! Everything here is server-only. Server functions use it to forward loader
//! and action calls to the backend that owns the data.
//!
//! ## Design
//!
//! The effective [`SchoolConfig`](school::SchoolConfig) and the shared
//! `reqwest::Client` are **lazy, process-wide singletons** backed by
//! [`tokio::sync::OnceCell`]. The first call to [`get_config`] reads
//! `pianoschool.toml` (path overridable with `PIANOSCHOOL_CONFIG`) and applies
//! the `API_BASE_URL` override from the environment (via `dotenvy`).
//!
//! [`BackendClient`] carries the bearer token stored in the user's session.
//! Non-success responses become [`BackendError::Api`] holding an
//! [`ApiError`](school::ApiError) with the backend's message and status.
//!
//! ## Re-exports
//!
//! - [`get_config`] — returns `&'static SchoolConfig`, initialising it on first use.
//! - [`BackendClient`] — authenticated or anonymous request builder.
//! - [`BackendError`], [`loader_error`], [`into_action`] — error mapping for loaders and actions.

mod client;
mod config;
mod error;

pub use client::BackendClient;
pub use config::get_config;
pub use error::{into_action, into_optional_action, loader_error, BackendError};
