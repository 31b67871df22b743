//! State Management
//!
//! Calculator state carried in shareable links.

pub mod shared;

pub use shared::{is_blank, restore_state, share_href, use_shared_state, STATE_PARAM};
