use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::card::{placeholder, render_card};
use crate::api::Partner;
use crate::model::Collection;

const MISSION: &str = "We present a curated database of the best campsites in the vast woods \
and backcountry of the World Wide Web Wilderness. We increase access to adventure for the \
public while promoting safe and respectful use of resources. The expert wilderness trekkers \
on our staff personally verify each campsite to make sure that they are up to our standards. \
We also present a platform for campers to share reviews on campsites they have visited with \
each other.";

pub fn render_about(f: &mut Frame, area: Rect, partners: &Collection<Partner>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    render_card(f, chunks[0], "Our Mission", None, vec![Line::raw(MISSION)]);

    let body = match placeholder(partners) {
        Some(line) => vec![line],
        None => partners
            .items
            .iter()
            .flat_map(|p| {
                [
                    Line::from(Span::styled(
                        p.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::styled(p.description.clone(), Style::default().fg(Color::Gray)),
                    Line::raw(""),
                ]
            })
            .collect(),
    };
    render_card(f, chunks[1], "Community Partners", None, body);
}
