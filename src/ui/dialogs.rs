use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use crate::logic::share::SharePayload;
use crate::logic::ui::rating_stars;
use crate::model::{CommentField, CommentModal, ConfirmPrompt};

fn dialog_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(color))
}

/// Render a yes/no prompt
pub fn render_confirm(f: &mut Frame, prompt: &ConfirmPrompt) {
    let body = prompt.body();
    let (ok_label, cancel_label) = match prompt {
        ConfirmPrompt::Reservation(_) => ("OK", "Cancel"),
        _ => ("Yes", "No"),
    };
    let prompt_text = format!("{}\n\n[y] {}   [n] {}", body, ok_label, cancel_label);

    let prompt_height = body.lines().count() as u16 + 6;
    let prompt_area = centered_rect(f.area(), 56, prompt_height);

    let prompt_widget = Paragraph::new(prompt_text)
        .block(dialog_block(prompt.title(), Color::Yellow))
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt_widget, prompt_area);
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn input_line(label: &'static str, value: &str, focused: bool) -> Line<'static> {
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<9}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}{}", value, cursor), field_style(focused)),
    ])
}

/// Render the comment modal with its draft
pub fn render_comment_modal(f: &mut Frame, modal: &CommentModal) {
    let focus = modal.focus;
    let draft = &modal.draft;

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<9}", "Rating"), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} ({}/5)", rating_stars(draft.rating), draft.rating),
                field_style(focus == CommentField::Rating),
            ),
        ]),
        input_line("Author", &draft.author, focus == CommentField::Author),
        input_line("Comment", &draft.text, focus == CommentField::Text),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[ Submit ]", field_style(focus == CommentField::Submit)),
            Span::raw("  "),
            Span::styled("[ Cancel ]", field_style(focus == CommentField::Cancel)),
        ]),
        Line::raw(""),
        Line::styled(
            "Tab:Next  ←/→ or 1-5:Rating  ^S:Submit  Esc:Cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let area = centered_rect(f.area(), 64, 10);
    let modal_widget = Paragraph::new(lines)
        .block(dialog_block("Add Comment", Color::Cyan))
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(modal_widget, area);
}

/// Render the share sheet
pub fn render_share_sheet(f: &mut Frame, payload: &SharePayload, can_copy: bool) {
    let hint = if can_copy {
        "Enter:Copy to clipboard  Esc:Close"
    } else {
        "Esc:Close (set clipboard_command to copy)"
    };

    let lines = vec![
        Line::raw(payload.message.clone()),
        Line::raw(""),
        Line::styled(payload.url.clone(), Style::default().fg(Color::Cyan)),
        Line::raw(""),
        Line::styled(hint, Style::default().fg(Color::DarkGray)),
    ];

    let area = centered_rect(f.area(), 70, 12);
    let sheet = Paragraph::new(lines)
        .block(dialog_block(&payload.dialog_title, Color::Green))
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(sheet, area);
}
