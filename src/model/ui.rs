//! UI Model
//!
//! Dialogs, forms, toasts and other visual state.

use std::time::Instant;

use super::types::{CommentModal, ConfirmPrompt, ReservationForm};
use crate::logic::connectivity::ConnectionType;
use crate::logic::share::SharePayload;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Yes/no prompt (add favorite, delete favorite, reservation)
    pub confirm: Option<ConfirmPrompt>,

    /// Comment modal; holds the draft while visible
    pub comment_modal: Option<CommentModal>,

    /// Share sheet for a campsite
    pub share_sheet: Option<SharePayload>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // FORMS
    // ============================================
    pub reservation: ReservationForm,

    // ============================================
    // STATUS
    // ============================================
    /// Last connection type reported by the connectivity notifier
    pub network: Option<ConnectionType>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            confirm: None,
            comment_modal: None,
            share_sheet: None,
            toast_message: None,
            reservation: ReservationForm::default(),
            network: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm.is_some() || self.comment_modal.is_some() || self.share_sheet.is_some()
    }

    /// Close all modal dialogs, discarding any comment draft
    pub fn close_all_modals(&mut self) {
        self.confirm = None;
        self.comment_modal = None;
        self.share_sheet = None;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(text, _)| text.as_str())
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new();
        assert!(!model.has_modal());
        assert!(!model.should_quit);
        assert!(model.network.is_none());
    }

    #[test]
    fn test_close_all_modals() {
        let mut model = UiModel::new();
        model.comment_modal = Some(CommentModal::new(1));
        model.confirm = Some(ConfirmPrompt::AddFavorite {
            campsite_id: 1,
            campsite_name: "x".to_string(),
        });
        assert!(model.has_modal());

        model.close_all_modals();
        assert!(!model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new();
        model.show_toast("Saved".to_string());
        assert_eq!(model.toast_text(), Some("Saved"));
        assert!(!model.should_dismiss_toast());
        model.dismiss_toast();
        assert!(model.toast_text().is_none());
    }
}
