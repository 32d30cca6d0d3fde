//! Drag gesture dispatch
//!
//! Turns a classified drag on the campsite card into a favorite prompt or
//! the comment modal.

use crate::logic::gesture::{classify_with, GestureIntent, GestureSample};
use crate::messages::Command;
use crate::model::{ConfirmPrompt, Model};

use super::comments;

/// Handle a completed drag over the campsite card
///
/// Ignored while a modal or the drawer is open, or when no campsite is shown.
pub fn handle_gesture(model: &mut Model, sample: GestureSample) -> Vec<Command> {
    if model.has_modal() || model.navigation.drawer_open {
        log::debug!("Gesture dx={} ignored while a modal is open", sample.dx);
        return Vec::new();
    }

    let Some(campsite) = model.current_campsite() else {
        return Vec::new();
    };
    let campsite_id = campsite.id;
    let campsite_name = campsite.name.clone();

    let intent = classify_with(sample.dx, &model.settings.gesture);
    log::debug!("pan responder end dx={} dy={} -> {:?}", sample.dx, sample.dy, intent);

    match intent {
        GestureIntent::FavoriteRequested => {
            model.ui.confirm = Some(ConfirmPrompt::AddFavorite {
                campsite_id,
                campsite_name,
            });
        }
        GestureIntent::CommentRequested => comments::open_comment_modal(model, campsite_id),
        GestureIntent::None => {}
    }

    Vec::new()
}
