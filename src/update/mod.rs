//! Reducer
//!
//! `update` is the only place the model changes. Each message is handled
//! to completion and may return commands for the runtime to execute.
//! Feature-specific transitions live in the submodules:
//! - comments: Comment modal lifecycle
//! - favorites: Favorite guard and removal
//! - gesture: Drag gesture dispatch on the campsite card
//! - navigation: Screen stack, drawer, list selection
//! - prompts: Yes/no prompt answers
//! - reservation: Reservation form edits and submission
//! - share: Share sheet

pub mod comments;
pub mod favorites;
pub mod gesture;
pub mod navigation;
pub mod prompts;
pub mod reservation;
pub mod share;

use crate::logic::connectivity::announcement_for;
use crate::logic::errors::error_toast;
use crate::messages::{Command, Msg, Resource};
use crate::model::directory::ConnectionState;
use crate::model::{Collection, FetchFailure, LoadState, Model};

/// Startup: mark every collection as loading and request it
pub fn init(model: &mut Model) -> Vec<Command> {
    model.directory.campsites.state = LoadState::Loading;
    model.directory.comments.state = LoadState::Loading;
    model.directory.promotions.state = LoadState::Loading;
    model.directory.partners.state = LoadState::Loading;

    Resource::ALL.iter().map(|r| Command::Fetch(*r)).collect()
}

/// Apply one message to the model
pub fn update(model: &mut Model, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::KeyPress(key) => crate::handlers::keyboard::handle_key(model, key),

        Msg::Gesture(sample) => gesture::handle_gesture(model, sample),

        Msg::CampsitesLoaded(result) => {
            let directory = &mut model.directory;
            apply_collection("campsites", &mut directory.campsites, &mut directory.connection_state, result);
            navigation::clamp_selections(model);
            Vec::new()
        }

        Msg::CommentsLoaded(result) => {
            let directory = &mut model.directory;
            apply_collection("comments", &mut directory.comments, &mut directory.connection_state, result);
            Vec::new()
        }

        Msg::PromotionsLoaded(result) => {
            let directory = &mut model.directory;
            apply_collection("promotions", &mut directory.promotions, &mut directory.connection_state, result);
            Vec::new()
        }

        Msg::PartnersLoaded(result) => {
            let directory = &mut model.directory;
            apply_collection("partners", &mut directory.partners, &mut directory.connection_state, result);
            Vec::new()
        }

        Msg::CommentPosted(result) => {
            comments::comment_posted(model, result);
            Vec::new()
        }

        Msg::FavoritesLoaded(ids) => {
            log::debug!("Loaded {} favorites from store", ids.len());
            model.favorites.replace_all(ids);
            navigation::clamp_selections(model);
            Vec::new()
        }

        Msg::FavoriteAdded(result) => {
            favorites::favorite_added(model, result);
            Vec::new()
        }

        Msg::FavoriteRemoved(result) => {
            favorites::favorite_removed(model, result);
            Vec::new()
        }

        Msg::ConnectivityChanged(connection) => {
            if let Some(text) = announcement_for(model.ui.network.as_ref(), &connection) {
                log::info!("{}", text);
                model.show_toast(text);
            }
            model.ui.network = Some(connection);
            Vec::new()
        }

        Msg::ShareCopied(result) => {
            share::share_copied(model, result);
            Vec::new()
        }

        Msg::Tick => {
            if model.ui.should_dismiss_toast() {
                model.ui.dismiss_toast();
            }
            Vec::new()
        }
    }
}

fn apply_collection<T>(
    name: &str,
    collection: &mut Collection<T>,
    connection: &mut ConnectionState,
    result: Result<Vec<T>, FetchFailure>,
) {
    match result {
        Ok(items) => {
            log::debug!("Loaded {} {}", items.len(), name);
            collection.items = items;
            collection.state = LoadState::Loaded;
            *connection = ConnectionState::Connected;
        }
        Err(failure) => {
            log::warn!("Failed to load {}: {}", name, failure.message);
            collection.state = LoadState::Failed(failure.message.clone());
            *connection = ConnectionState::Disconnected {
                error_type: failure.error_type,
                message: failure.message,
            };
        }
    }
}

/// Toast for a failed operation
pub(crate) fn report_error(model: &mut Model, context: &str, message: &str) {
    log::warn!("{}: {}", context, message);
    model.show_toast(error_toast(&format!("{}: {}", context, message)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Campsite;
    use crate::logic::connectivity::ConnectionType;
    use crate::logic::errors::ErrorType;

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
    fn test_init_fetches_every_resource() {
        let mut model = Model::default();
        let commands = init(&mut model);
        assert_eq!(commands.len(), 4);
        assert!(commands.contains(&Command::Fetch(Resource::Campsites)));
        assert!(commands.contains(&Command::Fetch(Resource::Partners)));
        assert!(model.directory.campsites.is_loading());
    }

    #[test]
    fn test_campsites_loaded_marks_connected() {
        let mut model = Model::default();
        init(&mut model);
        update(&mut model, Msg::CampsitesLoaded(Ok(vec![campsite(0), campsite(1)])));
        assert_eq!(model.directory.campsites.state, LoadState::Loaded);
        assert_eq!(model.directory.campsites.items.len(), 2);
        assert_eq!(model.directory.connection_state, ConnectionState::Connected);
    }

    #[test]
    fn test_fetch_failure_recorded_on_collection() {
        let mut model = Model::default();
        init(&mut model);
        let failure = FetchFailure {
            error_type: ErrorType::ConnectionRefused,
            message: "connection refused".to_string(),
        };
        update(&mut model, Msg::PartnersLoaded(Err(failure)));
        assert_eq!(model.directory.partners.error(), Some("connection refused"));
        assert!(matches!(
            model.directory.connection_state,
            ConnectionState::Disconnected { error_type: ErrorType::ConnectionRefused, .. }
        ));
    }

    #[test]
    fn test_connectivity_announcements() {
        let mut model = Model::default();
        update(&mut model, Msg::ConnectivityChanged(ConnectionType::Wifi));
        assert_eq!(
            model.ui.toast_text(),
            Some("Initial Network Connectivity Type: wifi")
        );

        model.ui.dismiss_toast();
        update(&mut model, Msg::ConnectivityChanged(ConnectionType::Wifi));
        assert!(model.ui.toast_text().is_none());

        update(&mut model, Msg::ConnectivityChanged(ConnectionType::Cellular));
        assert_eq!(
            model.ui.toast_text(),
            Some("Connection change: You are now connected to a cellular network.")
        );
        assert_eq!(model.ui.network, Some(ConnectionType::Cellular));
    }

    #[test]
    fn test_tick_keeps_fresh_toast() {
        let mut model = Model::default();
        model.show_toast("hello");
        update(&mut model, Msg::Tick);
        assert_eq!(model.ui.toast_text(), Some("hello"));
    }
}
