use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const LOGO: &str = "♻ Ecoleta";

/// Logo, title and description, vertically centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let ui = &state.config.ui;
    let lines = vec![
        Line::from(Span::styled(LOGO, Theme::logo())),
        Line::default(),
        Line::from(Span::styled(ui.title.as_str(), Theme::title())),
        Line::default(),
        Line::from(Span::styled(ui.description.as_str(), Theme::description())),
    ];

    let height = [LOGO, "", ui.title.as_str(), "", ui.description.as_str()]
        .iter()
        .map(|text| wrapped_rows(text, area.width))
        .sum::<u16>()
        .min(area.height);
    let top = area.y + (area.height - height) / 2;

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, Rect::new(area.x, top, area.width, area.height - (top - area.y)));
}

/// Rows `text` takes when wrapped at `width` columns (at least one).
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let w = text.width() as u16;
    w.div_ceil(width.max(1)).max(1)
}
