use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub life_display: Rect,
    pub crown_gauge: Rect,
    pub decrease_button: Rect,
    pub increase_button: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: life | crown | buttons | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Life total
            Constraint::Length(1), // Crown gauge
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Buttons side by side, minus on the left like the watch face
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    AppLayout {
        life_display: main_chunks[0],
        crown_gauge: main_chunks[1],
        decrease_button: button_chunks[0],
        increase_button: button_chunks[1],
        status_bar: main_chunks[3],
    }
}
