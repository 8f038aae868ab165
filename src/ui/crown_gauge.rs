use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::LineGauge;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let gauge = LineGauge::default()
        .ratio(state.crown.fraction())
        .label(format!("crown {:+6.1} ", state.crown.value()))
        .filled_style(Theme::crown_gauge())
        .unfilled_style(Theme::border());
    frame.render_widget(gauge, area);
}
