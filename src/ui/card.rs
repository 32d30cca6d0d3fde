use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{Collection, LoadState};

/// Placeholder text for a collection that has nothing to show yet
pub fn placeholder<T>(collection: &Collection<T>) -> Option<Line<'static>> {
    match &collection.state {
        LoadState::Idle | LoadState::Loading => Some(Line::styled(
            "Loading . . .",
            Style::default().fg(Color::DarkGray),
        )),
        LoadState::Failed(message) => Some(Line::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        LoadState::Loaded => None,
    }
}

/// Bordered card with a bold heading line above its body
pub fn render_card(f: &mut Frame, area: Rect, title: &str, heading: Option<&str>, body: Vec<Line<'_>>) {
    let mut lines = Vec::with_capacity(body.len() + 2);
    if let Some(heading) = heading {
        lines.push(Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
    }
    lines.extend(body);

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(Color::Gray)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}
