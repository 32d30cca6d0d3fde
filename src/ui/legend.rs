use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::Screen;

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(screen: Screen, vim_mode: bool, drawer_open: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    let nav = if vim_mode { "j/k" } else { "↑/↓" };

    if drawer_open {
        hotkey_spans.extend(vec![
            key(nav),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Go  "),
            key("Esc/m"),
            Span::raw(":Close Menu  "),
        ]);
    } else {
        match screen {
            Screen::Directory | Screen::Favorites => {
                hotkey_spans.extend(vec![
                    key(nav),
                    Span::raw(":Nav  "),
                    key("Enter"),
                    Span::raw(":Open  "),
                ]);
                if screen == Screen::Favorites {
                    hotkey_spans.extend(vec![key("d"), Span::raw(":Delete  ")]);
                }
            }
            Screen::CampsiteInfo(_) => {
                hotkey_spans.extend(vec![
                    key("f"),
                    Span::raw(":Favorite  "),
                    key("c"),
                    Span::raw(":Comment  "),
                    key("s"),
                    Span::raw(":Share  "),
                    key(nav),
                    Span::raw(":Scroll  "),
                    key("drag ←/→"),
                    Span::raw(":Favorite/Comment  "),
                ]);
            }
            Screen::Reservation => {
                hotkey_spans.extend(vec![
                    key(nav),
                    Span::raw(":Field  "),
                    key(if vim_mode { "h/l" } else { "←/→" }),
                    Span::raw(":Change  "),
                    key("Space"),
                    Span::raw(":Toggle  "),
                    key("Enter"),
                    Span::raw(":Search  "),
                ]);
            }
            Screen::Home | Screen::About | Screen::Contact => {}
        }

        // Only stack children can go back
        if matches!(screen, Screen::CampsiteInfo(_)) {
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Back  ")]);
        }
        hotkey_spans.extend(vec![key("m"), Span::raw(":Menu  ")]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Render the hotkey legend for the current screen
pub fn render_legend(f: &mut Frame, area: Rect, screen: Screen, vim_mode: bool, drawer_open: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(screen, vim_mode, drawer_open)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, screen: Screen, vim_mode: bool, drawer_open: bool) -> u16 {
    let text_width: usize = build_hotkey_spans(screen, vim_mode, drawer_open)
        .iter()
        .map(|span| span.content.width())
        .sum();

    // Subtract left + right borders
    let available_width = terminal_width.saturating_sub(2).max(1) as usize;
    let line_count = text_width.div_ceil(available_width).max(1);

    // Add top + bottom borders
    (line_count as u16).saturating_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_campsite_legend_shows_icon_keys() {
        let text = spans_to_text(&build_hotkey_spans(Screen::CampsiteInfo(0), false, false));
        assert!(text.contains("f:Favorite"), "got: {}", text);
        assert!(text.contains("c:Comment"), "got: {}", text);
        assert!(text.contains("s:Share"), "got: {}", text);
        assert!(text.contains("Esc:Back"), "got: {}", text);
    }

    #[test]
    fn test_home_has_no_back_key() {
        let text = spans_to_text(&build_hotkey_spans(Screen::Home, false, false));
        assert!(!text.contains("Back"), "got: {}", text);
        assert!(text.ends_with("q:Quit"));
    }

    #[test]
    fn test_delete_only_on_favorites() {
        let favorites = spans_to_text(&build_hotkey_spans(Screen::Favorites, false, false));
        let directory = spans_to_text(&build_hotkey_spans(Screen::Directory, false, false));
        assert!(favorites.contains("d:Delete"));
        assert!(!directory.contains("d:Delete"));
    }

    #[test]
    fn test_vim_mode_nav_keys() {
        let text = spans_to_text(&build_hotkey_spans(Screen::Directory, true, false));
        assert!(text.starts_with("j/k:Nav"), "got: {}", text);
    }

    #[test]
    fn test_drawer_legend_replaces_screen_keys() {
        let text = spans_to_text(&build_hotkey_spans(Screen::Favorites, false, true));
        assert!(text.contains("Close Menu"));
        assert!(!text.contains("d:Delete"));
    }

    #[test]
    fn test_legend_height_wraps_on_narrow_terminal() {
        let wide = calculate_legend_height(200, Screen::CampsiteInfo(0), false, false);
        let narrow = calculate_legend_height(30, Screen::CampsiteInfo(0), false, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
