use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_GREEN: Color = Color::Rgb(52, 203, 121);
    pub const ACCENT_PURPLE: Color = Color::Rgb(160, 130, 230);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 176);
    pub const TEXT_MUTED: Color = Color::Rgb(158, 160, 164);
    pub const ERROR: Color = Color::Rgb(230, 90, 90);
    pub const BORDER_DIM: Color = Color::DarkGray;
    pub const BG_SURFACE: Color = Color::Rgb(30, 30, 40);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn logo() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn description() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn field_label() -> Style {
        Style::default().fg(Self::ACCENT_PURPLE)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn loading() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Color::DarkGray)
    }
}
