use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn background() -> Style {
        Style::default().bg(Color::Black)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_pressed() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_repeating() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn button_label() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn life_value() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn life_lost() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn crown_gauge() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
