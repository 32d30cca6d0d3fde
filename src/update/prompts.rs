//! Yes/no prompt answers

use crate::messages::Command;
use crate::model::{ConfirmPrompt, Model};

use super::{favorites, reservation};

/// Close the open prompt with the user's answer
pub fn answer_prompt(model: &mut Model, accepted: bool) -> Vec<Command> {
    let Some(prompt) = model.ui.confirm.take() else {
        return Vec::new();
    };

    match prompt {
        ConfirmPrompt::AddFavorite { campsite_id, .. } => {
            if accepted {
                favorites::mark_favorite(model, campsite_id)
            } else {
                log::debug!("Cancel Pressed");
                Vec::new()
            }
        }
        ConfirmPrompt::DeleteFavorite { campsite_id, .. } => {
            if accepted {
                vec![Command::DeleteFavorite(campsite_id)]
            } else {
                Vec::new()
            }
        }
        ConfirmPrompt::Reservation(summary) => {
            reservation::finish(model, accepted, &summary);
            Vec::new()
        }
    }
}
