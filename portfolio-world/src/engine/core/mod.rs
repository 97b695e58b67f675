//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and state
//! transitions for both native and WASM targets.

/// App construction: plugins, resources and system scheduling.
pub mod app_setup;

/// `Loading` → `Running` state machine.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
