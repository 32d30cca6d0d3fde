use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{ReservationField, ReservationForm, MAX_CAMPERS, MIN_CAMPERS};

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<20}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, value_style),
    ])
}

pub fn render_reservation(f: &mut Frame, area: Rect, form: &ReservationForm) {
    let lines = vec![
        field_line(
            "Number of Campers",
            format!("‹ {} ›  ({}-{})", form.campers, MIN_CAMPERS, MAX_CAMPERS),
            form.focus == ReservationField::Campers,
        ),
        field_line(
            "Hike-In?",
            if form.hike_in { "[x]" } else { "[ ]" }.to_string(),
            form.focus == ReservationField::HikeIn,
        ),
        field_line(
            "Date",
            format!("‹ {} ›", form.date.format("%Y-%m-%d")),
            form.focus == ReservationField::Date,
        ),
        Line::raw(""),
        field_line("", "[ Search ]".to_string(), form.focus == ReservationField::Submit),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Reserve Campsite"),
    );
    f.render_widget(panel, area);
}
