use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::card::{placeholder, render_card};
use crate::api::{Campsite, Comment};
use crate::logic::ui::{comment_byline, format_comment_date, rating_stars};
use crate::model::DirectoryModel;

/// Icon row under the campsite description
fn icon_line(is_favorite: bool) -> Line<'static> {
    let heart = if is_favorite { "♥" } else { "♡" };
    Line::from(vec![
        Span::styled(heart, Style::default().fg(Color::Red)),
        Span::styled(" f", Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled("✎", Style::default().fg(Color::Cyan)),
        Span::styled(" c", Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled("⇪", Style::default().fg(Color::Green)),
        Span::styled(" s", Style::default().fg(Color::Yellow)),
    ])
}

fn comment_lines(comments: &[&Comment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for comment in comments {
        lines.push(Line::raw(comment.text.clone()));
        lines.push(Line::styled(
            rating_stars(comment.rating),
            Style::default().fg(Color::Yellow),
        ));
        lines.push(Line::styled(
            comment_byline(&comment.author, &format_comment_date(&comment.date)),
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::raw(""));
    }
    lines
}

/// Campsite card plus its comments; returns the card area (drag target)
pub fn render_campsite_info(
    f: &mut Frame,
    area: Rect,
    directory: &DirectoryModel,
    campsite_id: u32,
    is_favorite: bool,
    comments_scroll: u16,
) -> Option<Rect> {
    let Some(campsite) = directory.campsite(campsite_id) else {
        let line = placeholder(&directory.campsites).unwrap_or_else(|| {
            Line::styled("Campsite not found", Style::default().fg(Color::Red))
        });
        render_card(f, area, "Campsite Information", None, vec![line]);
        return None;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    render_campsite_card(f, chunks[0], campsite, is_favorite);

    let comments = directory.comments_for(campsite_id);
    let body = match placeholder(&directory.comments) {
        Some(line) => vec![line],
        None if comments.is_empty() => vec![Line::styled(
            "No comments yet",
            Style::default().fg(Color::DarkGray),
        )],
        None => comment_lines(&comments),
    };

    let comments_panel = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Comments ({})", comments.len())),
        )
        .wrap(Wrap { trim: false })
        .scroll((comments_scroll, 0));
    f.render_widget(comments_panel, chunks[1]);

    Some(chunks[0])
}

fn render_campsite_card(f: &mut Frame, area: Rect, campsite: &Campsite, is_favorite: bool) {
    let lines = vec![
        Line::from(Span::styled(
            campsite.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::styled(
            format!("Elevation: {} ft", campsite.elevation),
            Style::default().fg(Color::Gray),
        ),
        Line::raw(""),
        Line::raw(campsite.description.clone()),
        Line::raw(""),
        icon_line(is_favorite),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Campsite")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}
