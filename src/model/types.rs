//! Shared types for the Model
//!
//! Transient form state, prompts and load tracking used across sub-models.

use chrono::{Duration, Local, NaiveDate};

use crate::logic::errors::ErrorType;
use crate::logic::gesture::GestureThresholds;

/// Load status of a backend collection
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// Not requested yet
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// A backend collection together with its load status
#[derive(Clone, Debug)]
pub struct Collection<T> {
    pub state: LoadState,
    pub items: Vec<T>,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            items: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Error delivered in place of a backend result
#[derive(Clone, Debug, PartialEq)]
pub struct FetchFailure {
    pub error_type: ErrorType,
    pub message: String,
}

impl From<&anyhow::Error> for FetchFailure {
    fn from(error: &anyhow::Error) -> Self {
        Self {
            error_type: crate::logic::errors::classify_error(error),
            message: crate::logic::errors::format_error_message(error),
        }
    }
}

/// Settings the model needs from the config file
#[derive(Clone, Debug)]
pub struct Settings {
    pub base_url: String,
    pub gesture: GestureThresholds,
    pub vim_mode: bool,
    pub clipboard_available: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            gesture: GestureThresholds::default(),
            vim_mode: false,
            clipboard_available: false,
        }
    }
}

// ============================================
// COMMENT DRAFT
// ============================================

pub const DEFAULT_RATING: u8 = 5;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Unsaved comment form state, scoped to one modal session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: u8,
    pub author: String,
    pub text: String,
}

impl Default for CommentDraft {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            author: String::new(),
            text: String::new(),
        }
    }
}

impl CommentDraft {
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.clamp(MIN_RATING, MAX_RATING);
    }

    pub fn increase_rating(&mut self) {
        self.set_rating(self.rating.saturating_add(1));
    }

    pub fn decrease_rating(&mut self) {
        self.set_rating(self.rating.saturating_sub(1));
    }
}

/// Focusable fields of the comment modal, in Tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentField {
    Rating,
    Author,
    Text,
    Submit,
    Cancel,
}

impl CommentField {
    const ORDER: [CommentField; 5] = [
        CommentField::Rating,
        CommentField::Author,
        CommentField::Text,
        CommentField::Submit,
        CommentField::Cancel,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Open comment modal. The draft exists only while the modal does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentModal {
    pub campsite_id: u32,
    pub draft: CommentDraft,
    pub focus: CommentField,
}

impl CommentModal {
    pub fn new(campsite_id: u32) -> Self {
        Self {
            campsite_id,
            draft: CommentDraft::default(),
            focus: CommentField::Rating,
        }
    }
}

// ============================================
// RESERVATION FORM
// ============================================

pub const MIN_CAMPERS: u8 = 1;
pub const MAX_CAMPERS: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationField {
    Campers,
    HikeIn,
    Date,
    Submit,
}

impl ReservationField {
    const ORDER: [ReservationField; 4] = [
        ReservationField::Campers,
        ReservationField::HikeIn,
        ReservationField::Date,
        ReservationField::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Reservation search form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationForm {
    pub campers: u8,
    pub hike_in: bool,
    pub date: NaiveDate,
    pub focus: ReservationField,
}

impl ReservationForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            campers: MIN_CAMPERS,
            hike_in: false,
            date: today,
            focus: ReservationField::Campers,
        }
    }

    pub fn add_campers(&mut self, delta: i8) {
        let next = (self.campers as i16 + delta as i16)
            .clamp(MIN_CAMPERS as i16, MAX_CAMPERS as i16);
        self.campers = next as u8;
    }

    /// Move the date by whole days; dates before `today` are not allowed
    pub fn shift_date(&mut self, days: i64, today: NaiveDate) {
        if let Some(next) = self.date.checked_add_signed(Duration::days(days)) {
            self.date = next.max(today);
        }
    }

    pub fn summary(&self) -> ReservationSummary {
        ReservationSummary {
            campers: self.campers,
            hike_in: self.hike_in,
            date: self.date,
        }
    }
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

/// Values shown in the reservation confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationSummary {
    pub campers: u8,
    pub hike_in: bool,
    pub date: NaiveDate,
}

impl ReservationSummary {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Number of Campers: {}", self.campers),
            format!("Hike-In? {}", if self.hike_in { "Yes" } else { "No" }),
            format!("Date: {}", self.date.format("%Y-%m-%d")),
        ]
    }
}

// ============================================
// PROMPTS
// ============================================

/// Yes/no prompt awaiting an answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmPrompt {
    AddFavorite { campsite_id: u32, campsite_name: String },
    DeleteFavorite { campsite_id: u32, campsite_name: String },
    Reservation(ReservationSummary),
}

impl ConfirmPrompt {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmPrompt::AddFavorite { .. } => "Add Favorite",
            ConfirmPrompt::DeleteFavorite { .. } => "Delete Favorite?",
            ConfirmPrompt::Reservation(_) => "Begin Search?",
        }
    }

    pub fn body(&self) -> String {
        match self {
            ConfirmPrompt::AddFavorite { campsite_name, .. } => format!(
                "Are you sure you wish to add {} to favorites?",
                campsite_name
            ),
            ConfirmPrompt::DeleteFavorite { campsite_name, .. } => format!(
                "Are you sure you wish to delete the favorite campsite {}?",
                campsite_name
            ),
            ConfirmPrompt::Reservation(summary) => summary.lines().join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_comment_draft_defaults() {
        let draft = CommentDraft::default();
        assert_eq!(draft.rating, 5);
        assert!(draft.author.is_empty());
        assert!(draft.text.is_empty());
    }

    #[test]
    fn test_comment_rating_clamped() {
        let mut draft = CommentDraft::default();
        draft.increase_rating();
        assert_eq!(draft.rating, 5);
        draft.set_rating(0);
        assert_eq!(draft.rating, 1);
        draft.decrease_rating();
        assert_eq!(draft.rating, 1);
    }

    #[test]
    fn test_comment_field_cycle() {
        assert_eq!(CommentField::Rating.next(), CommentField::Author);
        assert_eq!(CommentField::Cancel.next(), CommentField::Rating);
        assert_eq!(CommentField::Rating.prev(), CommentField::Cancel);
    }

    #[test]
    fn test_campers_clamped() {
        let mut form = ReservationForm::new(day(2024, 6, 1));
        form.add_campers(-1);
        assert_eq!(form.campers, 1);
        form.add_campers(10);
        assert_eq!(form.campers, 6);
    }

    #[test]
    fn test_date_never_before_today() {
        let today = day(2024, 6, 1);
        let mut form = ReservationForm::new(today);
        form.shift_date(-3, today);
        assert_eq!(form.date, today);
        form.shift_date(2, today);
        assert_eq!(form.date, day(2024, 6, 3));
    }

    #[test]
    fn test_favorite_prompt_text() {
        let prompt = ConfirmPrompt::AddFavorite {
            campsite_id: 1,
            campsite_name: "React Lake".to_string(),
        };
        assert_eq!(prompt.title(), "Add Favorite");
        assert_eq!(
            prompt.body(),
            "Are you sure you wish to add React Lake to favorites?"
        );
    }

    #[test]
    fn test_reservation_summary_lines() {
        let summary = ReservationSummary {
            campers: 3,
            hike_in: true,
            date: day(2024, 7, 4),
        };
        assert_eq!(
            summary.lines(),
            vec!["Number of Campers: 3", "Hike-In? Yes", "Date: 2024-07-04"]
        );
    }
}
