//! The life total, drawn large when it fits.

use crate::app::state::AppState;
use crate::counter::LifeDisplay;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const GLYPH_HEIGHT: usize = 5;
const GLYPH_WIDTH: usize = 3;

const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["██ ", " █ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (lines, style) = match state.counter.display() {
        LifeDisplay::Alive(value) => {
            let big = big_lines(value);
            let fits = big.first().map(|l| l.chars().count()).unwrap_or(0) <= area.width as usize
                && GLYPH_HEIGHT <= area.height as usize;
            if state.config.ui.big_digits && fits {
                (big, Theme::life_value())
            } else {
                (vec![value.to_string()], Theme::life_value())
            }
        }
        LifeDisplay::Lost => (vec![state.config.ui.lost_message.clone()], Theme::life_lost()),
    };

    let top_pad = (area.height as usize).saturating_sub(lines.len()) / 2;
    let mut text: Vec<Line> = vec![Line::default(); top_pad];
    text.extend(lines.into_iter().map(|l| Line::styled(l, style)));

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Block-digit rendering of `value`, one string per glyph row.
fn big_lines(value: i64) -> Vec<String> {
    let digits: Vec<usize> = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut line = String::with_capacity(digits.len() * (GLYPH_WIDTH + 1) * 3);
            for (i, d) in digits.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(DIGITS[*d][row]);
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_lines_forty() {
        let lines = big_lines(40);
        assert_eq!(lines.len(), GLYPH_HEIGHT);
        assert_eq!(lines[0], "█ █ ███");
        assert_eq!(lines[2], "███ █ █");
        assert_eq!(lines[4], "  █ ███");
    }

    #[test]
    fn test_big_lines_width() {
        let lines = big_lines(1234);
        assert_eq!(lines[0].chars().count(), 4 * GLYPH_WIDTH + 3);
    }
}
