//! Drag gesture classification
//!
//! Reduces a completed drag to at most one user intent. Thresholds are
//! strict: a displacement exactly on a threshold is ignored.

use serde::Deserialize;

/// Leftward distance (dp) a drag must exceed to propose a favorite
pub const FAVORITE_THRESHOLD_DP: f64 = 200.0;

/// Rightward distance (dp) a drag must exceed to propose a comment
pub const COMMENT_THRESHOLD_DP: f64 = 200.0;

/// Displacement sampled at gesture end, in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub dx: f64,
    pub dy: f64,
}

impl GestureSample {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Outcome of classifying a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    None,
    FavoriteRequested,
    CommentRequested,
}

/// Classifier thresholds, both expressed as positive distances
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    pub favorite: f64,
    pub comment: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            favorite: FAVORITE_THRESHOLD_DP,
            comment: COMMENT_THRESHOLD_DP,
        }
    }
}

/// Classify a horizontal displacement with the default thresholds
///
/// # Examples
/// ```
/// use camptui::logic::gesture::{classify, GestureIntent};
///
/// assert_eq!(classify(-250.0), GestureIntent::FavoriteRequested);
/// assert_eq!(classify(250.0), GestureIntent::CommentRequested);
/// assert_eq!(classify(-200.0), GestureIntent::None);
/// ```
pub fn classify(dx: f64) -> GestureIntent {
    classify_with(dx, &GestureThresholds::default())
}

/// Classify a horizontal displacement against explicit thresholds
///
/// The favorite check runs first, so the two intents can never both apply.
pub fn classify_with(dx: f64, thresholds: &GestureThresholds) -> GestureIntent {
    if dx < -thresholds.favorite {
        GestureIntent::FavoriteRequested
    } else if dx > thresholds.comment {
        GestureIntent::CommentRequested
    } else {
        GestureIntent::None
    }
}
