//! Keyboard direction state for avatar movement.
//!
//! Arrow keys and WASD map onto four independent flags that the avatar
//! controller reads once per frame.

/// Held-direction flags and the key bindings that drive them.
pub mod movement;
