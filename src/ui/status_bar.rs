use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::connectivity::ConnectionType;
use crate::model::directory::ConnectionState;

/// Backend state text and color
pub(crate) fn backend_status(state: &ConnectionState) -> (String, Color) {
    match state {
        ConnectionState::Pending => ("Backend: connecting".to_string(), Color::Yellow),
        ConnectionState::Connected => ("Backend: connected".to_string(), Color::Green),
        ConnectionState::Disconnected { error_type, .. } => {
            (format!("Backend: {}", error_type.label()), Color::Red)
        }
    }
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    connection_state: &ConnectionState,
    network: Option<&ConnectionType>,
    favorites_count: usize,
) {
    let (backend_text, backend_color) = backend_status(connection_state);
    let network_text = network.map_or("detecting", |n| n.as_str());

    let line = Line::from(vec![
        Span::styled(backend_text, Style::default().fg(backend_color)),
        Span::raw(" │ "),
        Span::raw(base_url.to_string()),
        Span::raw(" │ "),
        Span::raw(format!("Network: {}", network_text)),
        Span::raw(" │ "),
        Span::raw(format!("Favorites: {}", favorites_count)),
    ]);

    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}
