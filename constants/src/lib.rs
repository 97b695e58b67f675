//! Shared tuning values for the portfolio world.
//!
//! Kept in a standalone crate so layout and movement numbers live in one place
//! and can be read by tooling without pulling in the engine.

pub mod api;
pub mod avatar;
pub mod camera;
pub mod layout;
