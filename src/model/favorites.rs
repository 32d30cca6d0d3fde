//! Favorites Model
//!
//! Set of favorite campsite ids mirrored from the favorites store.

use std::collections::HashSet;

use crate::api::Campsite;

#[derive(Clone, Debug, Default)]
pub struct FavoritesModel {
    ids: HashSet<u32>,
}

impl FavoritesModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, campsite_id: u32) -> bool {
        self.ids.contains(&campsite_id)
    }

    /// Returns false if the id was already present
    pub fn insert(&mut self, campsite_id: u32) -> bool {
        self.ids.insert(campsite_id)
    }

    pub fn remove(&mut self, campsite_id: u32) -> bool {
        self.ids.remove(&campsite_id)
    }

    pub fn replace_all(&mut self, ids: impl IntoIterator<Item = u32>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite campsites in directory order
    pub fn campsites<'a>(&self, all: &'a [Campsite]) -> Vec<&'a Campsite> {
        all.iter().filter(|c| self.contains(c.id)).collect()
    }
}
