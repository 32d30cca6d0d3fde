use ratatui::{layout::Rect, text::Line, Frame};

use super::card::render_card;

const CONTACT_LINES: [&str; 6] = [
    "1 Nucamp Way",
    "Seattle, WA 98001",
    "U.S.A.",
    "",
    "Phone: 1-206-555-1234",
    "Email: campsites@nucamp.co",
];

pub fn render_contact(f: &mut Frame, area: Rect) {
    let body = CONTACT_LINES.iter().map(|l| Line::raw(*l)).collect();
    render_card(f, area, "Contact Information", None, body);
}
