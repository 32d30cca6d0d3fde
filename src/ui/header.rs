use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::navigation::ScreenChrome;

/// Header bar: menu icon, screen icon and title, back hint on stack children
pub fn render_header(f: &mut Frame, area: Rect, chrome: ScreenChrome, can_go_back: bool) {
    let mut spans = vec![
        Span::styled("≡ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{} {}", chrome.icon, chrome.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];

    if can_go_back {
        spans.push(Span::styled("  ‹ Back", Style::default().fg(Color::DarkGray)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}
