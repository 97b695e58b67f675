//! Startup loading of the site manifest.
//!
//! The manifest is requested on startup and polled each frame in the
//! `Loading` state. A missing or malformed file falls back to defaults so the
//! world always reaches `Running`.

/// Manifest request and resolution into [`crate::content::ApiConfig`].
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
