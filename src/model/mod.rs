//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **DirectoryModel**: Backend records (campsites, comments, promotions, partners)
//! - **FavoritesModel**: Favorite campsite ids
//! - **NavigationModel**: Screen stack, drawer, list selections
//! - **UiModel**: Dialogs, forms, toasts
//!
//! The model holds no services; it is only changed by `update::update`.

pub mod directory;
pub mod favorites;
pub mod navigation;
pub mod types;
pub mod ui;

pub use directory::DirectoryModel;
pub use favorites::FavoritesModel;
pub use navigation::{NavigationModel, Screen};
pub use types::*;
pub use ui::UiModel;

use crate::api::Campsite;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub directory: DirectoryModel,
    pub favorites: FavoritesModel,
    pub navigation: NavigationModel,
    pub ui: UiModel,
    pub settings: Settings,
}

impl Model {
    pub fn new(settings: Settings) -> Self {
        Self {
            directory: DirectoryModel::new(),
            favorites: FavoritesModel::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(),
            settings,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigation.current()
    }

    /// Campsite shown on the details screen, if that is the current screen
    pub fn current_campsite(&self) -> Option<&Campsite> {
        match self.current_screen() {
            Screen::CampsiteInfo(id) => self.directory.campsite(id),
            _ => None,
        }
    }

    /// Campsite highlighted in the directory list
    pub fn selected_directory_campsite(&self) -> Option<&Campsite> {
        self.navigation
            .directory_selection
            .and_then(|idx| self.directory.campsites.items.get(idx))
    }

    /// Favorite campsites in directory order
    pub fn favorite_campsites(&self) -> Vec<&Campsite> {
        self.favorites.campsites(&self.directory.campsites.items)
    }

    pub fn selected_favorite(&self) -> Option<&Campsite> {
        let favorites = self.favorite_campsites();
        self.navigation
            .favorites_selection
            .and_then(|idx| favorites.get(idx).copied())
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message.into());
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campsite(id: u32) -> Campsite {
        Campsite {
            id,
            name: format!("Site {}", id),
            image: String::new(),
            elevation: 0,
            featured: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_model_creation() {
        let model = Model::default();
        assert_eq!(model.current_screen(), Screen::Home);
        assert!(model.directory.campsites.items.is_empty());
        assert!(model.favorites.is_empty());
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::default();
        let _cloned = model.clone();
    }

    #[test]
    fn test_current_campsite_only_on_details_screen() {
        let mut model = Model::default();
        model.directory.campsites.items = vec![campsite(0), campsite(1)];
        assert!(model.current_campsite().is_none());

        model.navigation.navigate_root(Screen::Directory);
        model.navigation.push(Screen::CampsiteInfo(1));
        assert_eq!(model.current_campsite().map(|c| c.id), Some(1));
    }

    #[test]
    fn test_selected_favorite() {
        let mut model = Model::default();
        model.directory.campsites.items = vec![campsite(0), campsite(1), campsite(2)];
        model.favorites.replace_all([1, 2]);
        model.navigation.favorites_selection = Some(1);
        assert_eq!(model.selected_favorite().map(|c| c.id), Some(2));
    }
}
