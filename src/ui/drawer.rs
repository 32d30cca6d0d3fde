use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::model::Screen;

/// Render the drawer menu listing every root screen
pub fn render_drawer(f: &mut Frame, area: Rect, selection: usize, current: Screen) {
    let active = current.root();
    let items: Vec<ListItem> = Screen::DRAWER
        .iter()
        .map(|screen| {
            let chrome = screen.chrome();
            let label = chrome.drawer_label.unwrap_or(chrome.title);
            let style = if *screen == active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", chrome.icon, label)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selection.min(Screen::DRAWER.len() - 1)));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
