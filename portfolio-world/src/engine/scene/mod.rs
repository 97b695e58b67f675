//! Static world geometry and the content card rows.
//!
//! Provides the recentred ground plane, fixed-interval card layout,
//! and screen-space labels pinned to world positions.

/// Card entities per content row and the rebuild-on-update system.
pub mod cards;

/// Bounded ground plane that follows the avatar.
pub mod ground;

/// Row placement and work history skill chip grid.
pub mod layout;

/// World-anchored UI text projected through the follow camera.
pub mod labels;
