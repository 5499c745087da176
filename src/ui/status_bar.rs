use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());

    let hints = if state.popup.is_some() {
        " ↑↓ PgUp/PgDn  a-z jump  Enter select  Esc close "
    } else if state.states.is_failed() || state.cities.is_failed() {
        " Tab move  Enter open  r retry  q quit "
    } else {
        " Tab move  Enter open  q quit "
    };

    // Pad to fill remaining space
    let used = status.width() + hints.width();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(status, Theme::status_bar()),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(hints, Theme::key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
