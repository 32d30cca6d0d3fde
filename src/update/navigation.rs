//! Screen stack, drawer and list selection

use crate::logic::navigation::{clamp_selection, next_selection, prev_selection};
use crate::model::{Model, Screen};

pub fn open_campsite(model: &mut Model, campsite_id: u32) {
    model.navigation.push(Screen::CampsiteInfo(campsite_id));
}

/// Enter on a list screen opens the highlighted campsite
pub fn open_selected(model: &mut Model) {
    let campsite_id = match model.current_screen() {
        Screen::Directory => model.selected_directory_campsite().map(|c| c.id),
        Screen::Favorites => model.selected_favorite().map(|c| c.id),
        _ => None,
    };
    if let Some(id) = campsite_id {
        open_campsite(model, id);
    }
}

pub fn go_back(model: &mut Model) {
    model.navigation.pop();
}

pub fn toggle_drawer(model: &mut Model) {
    model.navigation.toggle_drawer();
}

pub fn move_drawer_selection(model: &mut Model, forward: bool) {
    let len = Screen::DRAWER.len();
    let current = Some(model.navigation.drawer_selection);
    let next = if forward {
        next_selection(current, len)
    } else {
        prev_selection(current, len)
    };
    model.navigation.drawer_selection = next.unwrap_or(0);
}

pub fn activate_drawer_selection(model: &mut Model) {
    let idx = model.navigation.drawer_selection.min(Screen::DRAWER.len() - 1);
    model.navigation.navigate_root(Screen::DRAWER[idx]);
}

/// Up/Down on the current screen's list
pub fn move_selection(model: &mut Model, forward: bool) {
    let step = |current: Option<usize>, len: usize| {
        if forward {
            next_selection(current, len)
        } else {
            prev_selection(current, len)
        }
    };

    match model.current_screen() {
        Screen::Directory => {
            let len = model.directory.campsites.items.len();
            model.navigation.directory_selection = step(model.navigation.directory_selection, len);
        }
        Screen::Favorites => {
            let len = model.favorite_campsites().len();
            model.navigation.favorites_selection = step(model.navigation.favorites_selection, len);
        }
        Screen::CampsiteInfo(_) => {
            let scroll = &mut model.navigation.comments_scroll;
            *scroll = if forward {
                scroll.saturating_add(1)
            } else {
                scroll.saturating_sub(1)
            };
        }
        _ => {}
    }
}

/// Keep list selections inside their lists after data changed
pub fn clamp_selections(model: &mut Model) {
    let directory_len = model.directory.campsites.items.len();
    let favorites_len = model.favorite_campsites().len();
    model.navigation.directory_selection =
        clamp_selection(model.navigation.directory_selection, directory_len);
    model.navigation.favorites_selection =
        clamp_selection(model.navigation.favorites_selection, favorites_len);
}
