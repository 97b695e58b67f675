//! Overlays and diagnostics that run alongside the world.
//!
//! Provides the terminal log panel, FPS tracking and a keyboard-triggered
//! state dump for development.

/// World state dump on F1.
pub mod debug_state;

/// Native FPS overlay text.
pub mod fps_tracking;

/// Activity log terminal panel.
pub mod terminal;
