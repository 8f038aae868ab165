mod buttons;
mod crown_gauge;
pub mod layout;
mod life_display;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::counter::Direction;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::background()), area);

    let app_layout = layout::compute_layout(area);
    life_display::render(frame, app_layout.life_display, state);
    crown_gauge::render(frame, app_layout.crown_gauge, state);
    buttons::render(frame, app_layout.decrease_button, state, Direction::Decrease);
    buttons::render(frame, app_layout.increase_button, state, Direction::Increase);
    status_bar::render(frame, app_layout.status_bar, state);
}
