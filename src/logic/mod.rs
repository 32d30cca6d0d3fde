//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or network:
//! - connectivity: Connection types, their messages, interface detection
//! - errors: Backend error classification and formatting
//! - gesture: Drag gesture classification
//! - navigation: List selection calculations
//! - share: Share payload construction
//! - ui: Display formatting and toast timing

pub mod connectivity;
pub mod errors;
pub mod gesture;
pub mod navigation;
pub mod share;
pub mod ui;
