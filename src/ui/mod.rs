mod header;
mod layout;
mod select;
mod status_bar;
mod submit_button;
mod theme;

use crate::app::state::{AppState, FocusField};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let screen = layout::compute_layout(area);

    header::render(frame, screen.header, state);
    select::render_field(frame, screen.state_select, state, FocusField::State);
    select::render_field(frame, screen.city_select, state, FocusField::City);
    submit_button::render(frame, screen.submit, state);
    status_bar::render(frame, screen.status_bar, state);

    // Popup last so it covers everything else
    select::render_popup(frame, state);
}
