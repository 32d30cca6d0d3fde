//! Message and command types for the Elm Architecture pattern
//!
//! `Msg` values flow into `update::update`, which mutates the model and
//! returns `Command`s. The runtime executes commands and feeds their results
//! back in as new messages.
//!
//! Message sources:
//! - User input (keyboard events, mouse drag gestures)
//! - API worker (backend responses)
//! - Favorites store (persistence results)
//! - Connectivity notifier
//! - Timers (toast dismissal)

use crossterm::event::KeyEvent;

use crate::api::{Campsite, Comment, Partner, Promotion};
use crate::logic::connectivity::ConnectionType;
use crate::logic::gesture::GestureSample;
use crate::model::FetchFailure;

/// Backend collections fetched at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Campsites,
    Comments,
    Promotions,
    Partners,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Campsites,
        Resource::Comments,
        Resource::Promotions,
        Resource::Partners,
    ];
}

/// Unified message type for all application events
#[derive(Debug)]
pub enum Msg {
    // ============================================
    // USER INPUT
    // ============================================
    /// User pressed a key
    KeyPress(KeyEvent),

    /// A drag over the campsite card ended
    Gesture(GestureSample),

    // ============================================
    // BACKEND (updates DirectoryModel)
    // ============================================
    CampsitesLoaded(Result<Vec<Campsite>, FetchFailure>),
    CommentsLoaded(Result<Vec<Comment>, FetchFailure>),
    PromotionsLoaded(Result<Vec<Promotion>, FetchFailure>),
    PartnersLoaded(Result<Vec<Partner>, FetchFailure>),

    /// Result of creating a comment
    CommentPosted(Result<Comment, FetchFailure>),

    // ============================================
    // FAVORITES STORE (updates FavoritesModel)
    // ============================================
    FavoritesLoaded(Vec<u32>),
    FavoriteAdded(Result<u32, String>),
    FavoriteRemoved(Result<u32, String>),

    // ============================================
    // PLATFORM
    // ============================================
    /// Connectivity notifier reported a connection type
    ConnectivityChanged(ConnectionType),

    /// Clipboard copy for the share sheet finished (Ok carries the shared title)
    ShareCopied(Result<String, String>),

    /// Periodic tick (toast dismissal)
    Tick,
}

/// Effects requested by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(Resource),
    PostComment {
        campsite_id: u32,
        rating: u8,
        author: String,
        text: String,
    },
    PostFavorite(u32),
    DeleteFavorite(u32),
    CopyToClipboard { title: String, text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_resources_distinct() {
        let unique: std::collections::HashSet<_> = Resource::ALL.iter().collect();
        assert_eq!(unique.len(), Resource::ALL.len());
    }

    #[test]
    fn test_command_equality() {
        assert_eq!(Command::PostFavorite(1), Command::PostFavorite(1));
        assert_ne!(Command::PostFavorite(1), Command::DeleteFavorite(1));
    }
}
