use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::card::{placeholder, render_card};
use crate::api::Campsite;
use crate::model::Collection;

/// Build one two-line list entry (name, description)
pub(crate) fn campsite_item(campsite: &Campsite, is_favorite: bool) -> ListItem<'static> {
    let mut name = vec![Span::styled(
        campsite.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if is_favorite {
        name.push(Span::styled(" ♥", Style::default().fg(Color::Red)));
    }

    ListItem::new(vec![
        Line::from(name),
        Line::styled(
            campsite.description.clone(),
            Style::default().fg(Color::Gray),
        ),
    ])
}

/// Campsite list with the current selection
pub fn render_directory(
    f: &mut Frame,
    area: Rect,
    campsites: &Collection<Campsite>,
    selection: Option<usize>,
    is_favorite: impl Fn(u32) -> bool,
) {
    if let Some(line) = placeholder(campsites) {
        render_card(f, area, "Directory", None, vec![line]);
        return;
    }

    let items: Vec<ListItem> = campsites
        .items
        .iter()
        .map(|c| campsite_item(c, is_favorite(c.id)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Directory ({})", campsites.items.len())),
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
