use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::card::{placeholder, render_card};
use super::directory::campsite_item;
use crate::api::Campsite;
use crate::model::Collection;

pub fn render_favorites(
    f: &mut Frame,
    area: Rect,
    campsites: &Collection<Campsite>,
    favorites: &[&Campsite],
    selection: Option<usize>,
) {
    if favorites.is_empty() {
        let line = placeholder(campsites).unwrap_or_else(|| {
            Line::styled(
                "No favorites yet. Press f on a campsite or drag its card left.",
                Style::default().fg(Color::DarkGray),
            )
        });
        render_card(f, area, "My Favorites", None, vec![line]);
        return;
    }

    let items: Vec<ListItem> = favorites.iter().map(|c| campsite_item(c, false)).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("My Favorites ({})", favorites.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selection);
    f.render_stateful_widget(list, area, &mut state);
}
