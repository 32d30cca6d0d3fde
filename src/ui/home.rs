use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    Frame,
};

use super::card::{placeholder, render_card};
use crate::model::DirectoryModel;

/// Featured campsite, promotion and partner
pub fn render_home(f: &mut Frame, area: Rect, directory: &DirectoryModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    match placeholder(&directory.campsites) {
        Some(line) => render_card(f, rows[0], "Featured Campsite", None, vec![line]),
        None => match directory.featured_campsite() {
            Some(c) => render_card(
                f,
                rows[0],
                "Featured Campsite",
                Some(c.name.as_str()),
                vec![Line::raw(c.description.clone())],
            ),
            None => render_card(f, rows[0], "Featured Campsite", None, vec![]),
        },
    }

    match placeholder(&directory.promotions) {
        Some(line) => render_card(f, rows[1], "Promotion", None, vec![line]),
        None => match directory.featured_promotion() {
            Some(p) => render_card(
                f,
                rows[1],
                "Promotion",
                Some(p.name.as_str()),
                vec![
                    Line::raw(format!("${:.2}", p.cost)),
                    Line::raw(p.description.clone()),
                ],
            ),
            None => render_card(f, rows[1], "Promotion", None, vec![]),
        },
    }

    match placeholder(&directory.partners) {
        Some(line) => render_card(f, rows[2], "Partner", None, vec![line]),
        None => match directory.featured_partner() {
            Some(p) => render_card(
                f,
                rows[2],
                "Partner",
                Some(p.name.as_str()),
                vec![Line::raw(p.description.clone())],
            ),
            None => render_card(f, rows[2], "Partner", None, vec![]),
        },
    }
}
