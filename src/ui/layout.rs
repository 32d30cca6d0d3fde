use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the drawer panel when open
pub const DRAWER_WIDTH: u16 = 26;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Header with screen title
    pub header_area: Rect,
    /// Drawer panel (when open)
    pub drawer_area: Option<Rect>,
    /// Area of the current screen
    pub content_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, drawer_open: bool) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (border, title, border)
            Constraint::Min(3),                // Screen content
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let body = main_chunks[1];
    let (drawer_area, content_area) = if drawer_open && body.width > DRAWER_WIDTH * 2 {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(DRAWER_WIDTH), Constraint::Min(10)])
            .split(body);
        (Some(split[0]), split[1])
    } else if drawer_open {
        // Too narrow for a side panel: drawer covers the body
        (Some(body), body)
    } else {
        (None, body)
    };

    LayoutInfo {
        header_area: main_chunks[0],
        drawer_area,
        content_area,
        legend_area: main_chunks[2],
        status_area: main_chunks[3],
    }
}

/// Rect of the given size centred in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
