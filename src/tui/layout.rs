use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Dashboard layout
pub struct AppLayout {
    pub header_area: Rect,
    pub search_area: Rect,
    pub results_area: Rect,
    pub preview_area: Rect,
    pub request_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Stack from top to bottom:
    /// - Header with per-AI counts: 3 rows
    /// - Search input: 3 rows
    /// - Results list (60% width, left) and prompt preview (40%, right)
    /// - Request input: 3 rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical_chunks[2]);

        Self {
            header_area: vertical_chunks[0],
            search_area: vertical_chunks[1],
            results_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            request_area: vertical_chunks[3],
            status_area: vertical_chunks[4],
        }
    }
}
