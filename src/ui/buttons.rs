use crate::app::state::AppState;
use crate::counter::{Direction, PressPhase};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, direction: Direction) {
    let (border_style, border_type) = match state.counter.phase() {
        PressPhase::Pressing(d) if d == direction => (Theme::border_pressed(), BorderType::Thick),
        PressPhase::Repeating(d) if d == direction => {
            (Theme::border_repeating(), BorderType::Double)
        }
        _ => (Theme::border(), BorderType::Rounded),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let label = match direction {
        Direction::Increase => "+",
        Direction::Decrease => "−",
    };
    let paragraph = Paragraph::new(Span::styled(label, Theme::button_label()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
