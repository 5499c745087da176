use crate::app::state::{AppState, FocusField};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusField::Submit && state.popup.is_none();
    let style = if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::button()
        })
        .style(style);

    let label = Line::from(vec![
        Span::raw("→  "),
        Span::raw(state.config.ui.submit_label.as_str()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(label).block(block), area);
}
