//! Directory Model
//!
//! Records fetched from the campsite backend and the state of the backend
//! connection.

use crate::api::{Campsite, Comment, Partner, Promotion};
use crate::logic::errors::ErrorType;

use super::types::Collection;

/// Connection state for the campsite backend
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// No request has completed yet
    Pending,
    Connected,
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

/// Backend data (campsites, comments, promotions, partners)
#[derive(Clone, Debug)]
pub struct DirectoryModel {
    pub campsites: Collection<Campsite>,
    pub comments: Collection<Comment>,
    pub promotions: Collection<Promotion>,
    pub partners: Collection<Partner>,

    /// Outcome of the most recent backend request
    pub connection_state: ConnectionState,
}

impl DirectoryModel {
    pub fn new() -> Self {
        Self {
            campsites: Collection::new(),
            comments: Collection::new(),
            promotions: Collection::new(),
            partners: Collection::new(),
            connection_state: ConnectionState::Pending,
        }
    }

    pub fn campsite(&self, campsite_id: u32) -> Option<&Campsite> {
        self.campsites.items.iter().find(|c| c.id == campsite_id)
    }

    /// Comments for one campsite, in backend order
    pub fn comments_for(&self, campsite_id: u32) -> Vec<&Comment> {
        self.comments
            .items
            .iter()
            .filter(|c| c.campsite_id == campsite_id)
            .collect()
    }

    pub fn featured_campsite(&self) -> Option<&Campsite> {
        self.campsites.items.iter().find(|c| c.featured)
    }

    pub fn featured_promotion(&self) -> Option<&Promotion> {
        self.promotions.items.iter().find(|p| p.featured)
    }

    pub fn featured_partner(&self) -> Option<&Partner> {
        self.partners.items.iter().find(|p| p.featured)
    }
}

impl Default for DirectoryModel {
    fn default() -> Self {
        Self::new()
    }
}
