//! Favorite guard and removal

use crate::messages::Command;
use crate::model::{ConfirmPrompt, Model};

/// Acknowledgment shown when favoriting an existing favorite
pub const ALREADY_FAVORITE: &str = "Already set as a favorite";

/// Favorite a campsite unless it already is one
pub fn mark_favorite(model: &mut Model, campsite_id: u32) -> Vec<Command> {
    if model.favorites.contains(campsite_id) {
        log::debug!("{} (campsite {})", ALREADY_FAVORITE, campsite_id);
        model.show_toast(ALREADY_FAVORITE);
        return Vec::new();
    }

    vec![Command::PostFavorite(campsite_id)]
}

/// Ask before removing the selected entry of the favorites list
pub fn request_delete_selected(model: &mut Model) {
    let Some(campsite) = model.selected_favorite() else {
        return;
    };
    model.ui.confirm = Some(ConfirmPrompt::DeleteFavorite {
        campsite_id: campsite.id,
        campsite_name: campsite.name.clone(),
    });
}

pub fn favorite_added(model: &mut Model, result: Result<u32, String>) {
    match result {
        Ok(campsite_id) => {
            model.favorites.insert(campsite_id);
            super::navigation::clamp_selections(model);
        }
        Err(message) => super::report_error(model, "Could not save favorite", &message),
    }
}

pub fn favorite_removed(model: &mut Model, result: Result<u32, String>) {
    match result {
        Ok(campsite_id) => {
            model.favorites.remove(campsite_id);
            super::navigation::clamp_selections(model);
        }
        Err(message) => super::report_error(model, "Could not delete favorite", &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_favorite_emits_command_once() {
        let mut model = Model::default();
        assert_eq!(mark_favorite(&mut model, 4), vec![Command::PostFavorite(4)]);
    }

    #[test]
    fn test_mark_existing_favorite_acknowledges() {
        let mut model = Model::default();
        model.favorites.insert(4);
        assert!(mark_favorite(&mut model, 4).is_empty());
        assert_eq!(model.ui.toast_text(), Some(ALREADY_FAVORITE));
    }

    #[test]
    fn test_favorite_added_updates_set() {
        let mut model = Model::default();
        favorite_added(&mut model, Ok(7));
        assert!(model.favorites.contains(7));
    }

    #[test]
    fn test_store_failure_leaves_set_untouched() {
        let mut model = Model::default();
        favorite_added(&mut model, Err("disk full".to_string()));
        assert!(model.favorites.is_empty());
        assert_eq!(
            model.ui.toast_text(),
            Some("Error: Could not save favorite: disk full")
        );
    }
}
