//! Integration tests for screen navigation and the favorites screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use camptui::api::Campsite;
use camptui::messages::{Command, Msg};
use camptui::model::{ConfirmPrompt, LoadState, Model, Screen};
use camptui::update;

fn campsite(id: u32, name: &str) -> Campsite {
    Campsite {
        id,
        name: name.to_string(),
        image: format!("images/{}.jpg", id),
        elevation: 100 * id,
        featured: id == 0,
        description: format!("{} description", name),
    }
}

fn loaded_model() -> Model {
    let mut model = Model::default();
    update::init(&mut model);
    update::update(
        &mut model,
        Msg::CampsitesLoaded(Ok(vec![
            campsite(0, "React Lake"),
            campsite(1, "Chrome River"),
            campsite(2, "Breadcrumb Trail"),
        ])),
    );
    model
}

fn key(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update::update(model, Msg::KeyPress(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn open_drawer_entry(model: &mut Model, screen: Screen) {
    key(model, KeyCode::Char('m'));
    while model.navigation.drawer_selection != screen.drawer_index() {
        key(model, KeyCode::Down);
    }
    key(model, KeyCode::Enter);
}

#[test]
fn test_initial_route_is_home() {
    let model = loaded_model();
    assert_eq!(model.current_screen(), Screen::Home);
    assert_eq!(model.directory.campsites.state, LoadState::Loaded);
    assert!(model.directory.comments.is_loading());
}

#[test]
fn test_directory_to_details_and_back() {
    let mut model = loaded_model();
    open_drawer_entry(&mut model, Screen::Directory);
    assert_eq!(model.current_screen(), Screen::Directory);
    assert_eq!(model.navigation.directory_selection, Some(0));

    key(&mut model, KeyCode::Down);
    key(&mut model, KeyCode::Enter);
    assert_eq!(model.current_screen(), Screen::CampsiteInfo(1));
    assert_eq!(model.current_campsite().map(|c| c.name.as_str()), Some("Chrome River"));

    key(&mut model, KeyCode::Left);
    assert_eq!(model.current_screen(), Screen::Directory);
}

#[test]
fn test_drawer_replaces_stack() {
    let mut model = loaded_model();
    open_drawer_entry(&mut model, Screen::Directory);
    key(&mut model, KeyCode::Enter);
    assert!(model.navigation.can_go_back());

    open_drawer_entry(&mut model, Screen::About);
    assert_eq!(model.current_screen(), Screen::About);
    assert!(!model.navigation.can_go_back());
}

#[test]
fn test_favorites_screen_delete_flow() {
    let mut model = loaded_model();
    update::update(&mut model, Msg::FavoritesLoaded(vec![2, 0]));
    open_drawer_entry(&mut model, Screen::Favorites);

    let names: Vec<&str> = model
        .favorite_campsites()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["React Lake", "Breadcrumb Trail"]);

    key(&mut model, KeyCode::Down);
    assert!(key(&mut model, KeyCode::Char('d')).is_empty());
    assert_eq!(
        model.ui.confirm,
        Some(ConfirmPrompt::DeleteFavorite {
            campsite_id: 2,
            campsite_name: "Breadcrumb Trail".to_string(),
        })
    );

    let commands = key(&mut model, KeyCode::Char('y'));
    assert_eq!(commands, vec![Command::DeleteFavorite(2)]);

    update::update(&mut model, Msg::FavoriteRemoved(Ok(2)));
    assert_eq!(model.favorite_campsites().len(), 1);
    assert_eq!(model.navigation.favorites_selection, Some(0));
}

#[test]
fn test_favorites_enter_opens_details() {
    let mut model = loaded_model();
    update::update(&mut model, Msg::FavoritesLoaded(vec![1]));
    open_drawer_entry(&mut model, Screen::Favorites);
    key(&mut model, KeyCode::Enter);
    assert_eq!(model.current_screen(), Screen::CampsiteInfo(1));
}

#[test]
fn test_quit_from_any_screen() {
    let mut model = loaded_model();
    open_drawer_entry(&mut model, Screen::Contact);
    key(&mut model, KeyCode::Char('q'));
    assert!(model.ui.should_quit);
}
