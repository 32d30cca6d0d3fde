//! Keyboard Input Handler
//!
//! Maps key events to model transitions. Open prompts and modals capture
//! input first, then the drawer, then the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::Command;
use crate::model::{CommentField, Model, ReservationField, Screen};
use crate::update::{comments, favorites, navigation, prompts, reservation, share};

/// Handle keyboard input
pub fn handle_key(model: &mut Model, key: KeyEvent) -> Vec<Command> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        model.ui.should_quit = true;
        return Vec::new();
    }

    // Modal input capture
    if model.ui.confirm.is_some() {
        return handle_confirm_key(model, key);
    }
    if model.ui.comment_modal.is_some() {
        return handle_comment_key(model, key);
    }
    if model.ui.share_sheet.is_some() {
        return handle_share_key(model, key);
    }
    if model.navigation.drawer_open {
        handle_drawer_key(model, key);
        return Vec::new();
    }

    let vim = model.settings.vim_mode;
    match key.code {
        KeyCode::Char('q') => {
            model.ui.should_quit = true;
            return Vec::new();
        }
        KeyCode::Char('m') => {
            navigation::toggle_drawer(model);
            return Vec::new();
        }
        KeyCode::Esc | KeyCode::Backspace => {
            navigation::go_back(model);
            return Vec::new();
        }
        _ => {}
    }

    match model.current_screen() {
        Screen::Directory => {
            match key.code {
                KeyCode::Up => navigation::move_selection(model, false),
                KeyCode::Down => navigation::move_selection(model, true),
                KeyCode::Char('k') if vim => navigation::move_selection(model, false),
                KeyCode::Char('j') if vim => navigation::move_selection(model, true),
                KeyCode::Enter | KeyCode::Right => navigation::open_selected(model),
                KeyCode::Char('l') if vim => navigation::open_selected(model),
                _ => {}
            }
            Vec::new()
        }
        Screen::Favorites => {
            match key.code {
                KeyCode::Up => navigation::move_selection(model, false),
                KeyCode::Down => navigation::move_selection(model, true),
                KeyCode::Char('k') if vim => navigation::move_selection(model, false),
                KeyCode::Char('j') if vim => navigation::move_selection(model, true),
                KeyCode::Enter | KeyCode::Right => navigation::open_selected(model),
                KeyCode::Char('d') | KeyCode::Delete => favorites::request_delete_selected(model),
                _ => {}
            }
            Vec::new()
        }
        Screen::CampsiteInfo(campsite_id) => handle_campsite_key(model, campsite_id, key),
        Screen::Reservation => {
            handle_reservation_key(model, key);
            Vec::new()
        }
        Screen::Home | Screen::About | Screen::Contact => Vec::new(),
    }
}

/// Icon row and comment scrolling on the details screen
fn handle_campsite_key(model: &mut Model, campsite_id: u32, key: KeyEvent) -> Vec<Command> {
    if model.directory.campsite(campsite_id).is_none() {
        if key.code == KeyCode::Left {
            navigation::go_back(model);
        }
        return Vec::new();
    }

    let vim = model.settings.vim_mode;
    match key.code {
        KeyCode::Char('f') => return favorites::mark_favorite(model, campsite_id),
        KeyCode::Char('c') => comments::open_comment_modal(model, campsite_id),
        KeyCode::Char('s') => share::open_share(model, campsite_id),
        KeyCode::Left => navigation::go_back(model),
        KeyCode::Char('h') if vim => navigation::go_back(model),
        KeyCode::Up => navigation::move_selection(model, false),
        KeyCode::Down => navigation::move_selection(model, true),
        KeyCode::Char('k') if vim => navigation::move_selection(model, false),
        KeyCode::Char('j') if vim => navigation::move_selection(model, true),
        _ => {}
    }
    Vec::new()
}

fn handle_reservation_key(model: &mut Model, key: KeyEvent) {
    let vim = model.settings.vim_mode;
    match key.code {
        KeyCode::Up | KeyCode::BackTab => reservation::focus_prev(model),
        KeyCode::Down | KeyCode::Tab => reservation::focus_next(model),
        KeyCode::Char('k') if vim => reservation::focus_prev(model),
        KeyCode::Char('j') if vim => reservation::focus_next(model),
        KeyCode::Left => reservation::adjust(model, false),
        KeyCode::Right => reservation::adjust(model, true),
        KeyCode::Char('h') if vim => reservation::adjust(model, false),
        KeyCode::Char('l') if vim => reservation::adjust(model, true),
        KeyCode::Char(' ') if model.ui.reservation.focus == ReservationField::HikeIn => {
            reservation::toggle_hike_in(model)
        }
        KeyCode::Enter => {
            if model.ui.reservation.focus == ReservationField::Submit {
                reservation::submit(model);
            } else {
                reservation::focus_next(model);
            }
        }
        _ => {}
    }
}

fn handle_confirm_key(model: &mut Model, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => prompts::answer_prompt(model, true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => prompts::answer_prompt(model, false),
        // Ignore other keys while prompt is showing
        _ => Vec::new(),
    }
}

fn handle_comment_key(model: &mut Model, key: KeyEvent) -> Vec<Command> {
    let Some(focus) = model.ui.comment_modal.as_ref().map(|m| m.focus) else {
        return Vec::new();
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            return comments::submit_comment(model);
        }
        return Vec::new();
    }

    match key.code {
        KeyCode::Esc => comments::cancel_comment(model),
        KeyCode::Tab | KeyCode::Down => comments::focus_next(model),
        KeyCode::BackTab | KeyCode::Up => comments::focus_prev(model),
        KeyCode::Enter => match focus {
            CommentField::Submit => return comments::submit_comment(model),
            CommentField::Cancel => comments::cancel_comment(model),
            _ => comments::focus_next(model),
        },
        KeyCode::Left if focus == CommentField::Rating => comments::adjust_rating(model, false),
        KeyCode::Right if focus == CommentField::Rating => comments::adjust_rating(model, true),
        KeyCode::Backspace => comments::delete_char(model),
        KeyCode::Char(c) => comments::input_char(model, c),
        _ => {}
    }
    Vec::new()
}

fn handle_share_key(model: &mut Model, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => share::copy_share(model),
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => {
            share::close_share(model);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_drawer_key(model: &mut Model, key: KeyEvent) {
    let vim = model.settings.vim_mode;
    match key.code {
        KeyCode::Up => navigation::move_drawer_selection(model, false),
        KeyCode::Down => navigation::move_drawer_selection(model, true),
        KeyCode::Char('k') if vim => navigation::move_drawer_selection(model, false),
        KeyCode::Char('j') if vim => navigation::move_drawer_selection(model, true),
        KeyCode::Enter | KeyCode::Right => navigation::activate_drawer_selection(model),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Left => navigation::toggle_drawer(model),
        KeyCode::Char('q') => model.ui.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Campsite;
    use crate::model::ConfirmPrompt;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn details_model() -> Model {
        let mut model = Model::default();
        model.directory.campsites.items = vec![Campsite {
            id: 0,
            name: "React Lake".to_string(),
            image: "images/react-lake.jpg".to_string(),
            elevation: 1233,
            featured: true,
            description: "Calm".to_string(),
        }];
        model.navigation.navigate_root(Screen::Directory);
        model.navigation.push(Screen::CampsiteInfo(0));
        model
    }

    #[test]
    fn test_q_quits() {
        let mut model = Model::default();
        handle_key(&mut model, press(KeyCode::Char('q')));
        assert!(model.ui.should_quit);
    }

    #[test]
    fn test_q_typed_into_comment_does_not_quit() {
        let mut model = details_model();
        handle_key(&mut model, press(KeyCode::Char('c')));
        handle_key(&mut model, press(KeyCode::Tab));
        handle_key(&mut model, press(KeyCode::Char('q')));
        assert!(!model.ui.should_quit);
        assert_eq!(model.ui.comment_modal.as_ref().unwrap().draft.author, "q");
    }

    #[test]
    fn test_heart_key_favorites_directly() {
        let mut model = details_model();
        let commands = handle_key(&mut model, press(KeyCode::Char('f')));
        assert_eq!(commands, vec![Command::PostFavorite(0)]);
    }

    #[test]
    fn test_confirm_prompt_captures_input() {
        let mut model = details_model();
        model.ui.confirm = Some(ConfirmPrompt::AddFavorite {
            campsite_id: 0,
            campsite_name: "React Lake".to_string(),
        });
        assert!(handle_key(&mut model, press(KeyCode::Char('s'))).is_empty());
        assert!(model.ui.share_sheet.is_none());

        let commands = handle_key(&mut model, press(KeyCode::Char('y')));
        assert_eq!(commands, vec![Command::PostFavorite(0)]);
        assert!(model.ui.confirm.is_none());
    }

    #[test]
    fn test_ctrl_s_submits_comment() {
        let mut model = details_model();
        handle_key(&mut model, press(KeyCode::Char('c')));
        let commands = handle_key(
            &mut model,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );
        assert_eq!(
            commands,
            vec![Command::PostComment {
                campsite_id: 0,
                rating: 5,
                author: String::new(),
                text: String::new(),
            }]
        );
        assert!(model.ui.comment_modal.is_none());
    }

    #[test]
    fn test_escape_goes_back() {
        let mut model = details_model();
        handle_key(&mut model, press(KeyCode::Esc));
        assert_eq!(model.current_screen(), Screen::Directory);
        handle_key(&mut model, press(KeyCode::Esc));
        assert_eq!(model.current_screen(), Screen::Directory);
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut model = Model::default();
        model.directory.campsites.items = details_model().directory.campsites.items;
        model.navigation.navigate_root(Screen::Directory);
        handle_key(&mut model, press(KeyCode::Char('j')));
        assert_eq!(model.navigation.directory_selection, None);

        model.settings.vim_mode = true;
        handle_key(&mut model, press(KeyCode::Char('j')));
        assert_eq!(model.navigation.directory_selection, Some(0));
    }

    #[test]
    fn test_drawer_selects_screen() {
        let mut model = Model::default();
        handle_key(&mut model, press(KeyCode::Char('m')));
        assert!(model.navigation.drawer_open);
        handle_key(&mut model, press(KeyCode::Up));
        handle_key(&mut model, press(KeyCode::Enter));
        assert_eq!(model.current_screen(), Screen::Favorites);
    }
}
