//! Comment modal lifecycle
//!
//! The draft lives inside `UiModel::comment_modal`; taking the modal out
//! of the model is the only way to submit, so a hidden modal can never be
//! submitted and the next open always starts from defaults.

use crate::api::Comment;
use crate::messages::Command;
use crate::model::{CommentField, CommentModal, FetchFailure, Model};

pub fn open_comment_modal(model: &mut Model, campsite_id: u32) {
    model.ui.comment_modal = Some(CommentModal::new(campsite_id));
}

/// Submit the draft and close the modal
pub fn submit_comment(model: &mut Model) -> Vec<Command> {
    let Some(modal) = model.ui.comment_modal.take() else {
        return Vec::new();
    };

    let CommentModal {
        campsite_id, draft, ..
    } = modal;
    log::debug!("Submitting comment for campsite {}", campsite_id);

    vec![Command::PostComment {
        campsite_id,
        rating: draft.rating,
        author: draft.author,
        text: draft.text,
    }]
}

/// Close the modal and discard the draft
pub fn cancel_comment(model: &mut Model) {
    model.ui.comment_modal = None;
}

pub fn focus_next(model: &mut Model) {
    if let Some(modal) = model.ui.comment_modal.as_mut() {
        modal.focus = modal.focus.next();
    }
}

pub fn focus_prev(model: &mut Model) {
    if let Some(modal) = model.ui.comment_modal.as_mut() {
        modal.focus = modal.focus.prev();
    }
}

/// Type a character into the focused text field
pub fn input_char(model: &mut Model, c: char) {
    let Some(modal) = model.ui.comment_modal.as_mut() else {
        return;
    };
    match modal.focus {
        CommentField::Author => modal.draft.author.push(c),
        CommentField::Text => modal.draft.text.push(c),
        CommentField::Rating => {
            if let Some(digit) = c.to_digit(10) {
                modal.draft.set_rating(digit as u8);
            }
        }
        CommentField::Submit | CommentField::Cancel => {}
    }
}

pub fn delete_char(model: &mut Model) {
    let Some(modal) = model.ui.comment_modal.as_mut() else {
        return;
    };
    match modal.focus {
        CommentField::Author => {
            modal.draft.author.pop();
        }
        CommentField::Text => {
            modal.draft.text.pop();
        }
        _ => {}
    }
}

pub fn adjust_rating(model: &mut Model, increase: bool) {
    if let Some(modal) = model.ui.comment_modal.as_mut() {
        if increase {
            modal.draft.increase_rating();
        } else {
            modal.draft.decrease_rating();
        }
    }
}

/// Backend answered a comment post
pub fn comment_posted(model: &mut Model, result: Result<Comment, FetchFailure>) {
    match result {
        Ok(comment) => {
            log::debug!("Comment {} created for campsite {}", comment.id, comment.campsite_id);
            model.directory.comments.items.push(comment);
        }
        Err(failure) => super::report_error(model, "Could not post comment", &failure.message),
    }
}
