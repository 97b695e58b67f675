//! Pointer interaction with the content cards.
//!
//! A left click casts a ray from the follow camera through the cursor. The
//! nearest card hit wins, its link is recorded in the activity log and then
//! opened in a new browser tab (WASM) or the system browser (native).
//!
//! ```text
//! MouseButton::Left just pressed
//!   └─> viewport_to_world(cursor)
//!       └─> pick_card() over every ContentCard box
//!           ├─> ActivityLog: "Opening <Type> link: <url>"
//!           └─> open_url()
//! ```

/// Ray/box picking and link opening.
pub mod card_links;
