//! Input Handlers
//!
//! - keyboard: Key events to model transitions
//! - mouse: Left-button drags on the campsite card to gesture samples

pub mod keyboard;
pub mod mouse;

pub use keyboard::handle_key;
pub use mouse::GestureTracker;
