use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

const MAX_WIDTH: u16 = 64;
const FIELD_HEIGHT: u16 = 3;

pub struct ScreenLayout {
    pub header: Rect,
    pub state_select: Rect,
    pub city_select: Rect,
    pub submit: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> ScreenLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT * 3), // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let status_bar = main_chunks[1];

    // Centered column
    let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
        .flex(Flex::Center)
        .horizontal_margin(2)
        .areas(main_chunks[0]);

    // Column: header | footer fields
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Header
            Constraint::Length(FIELD_HEIGHT), // State dropdown
            Constraint::Length(FIELD_HEIGHT), // City dropdown
            Constraint::Length(FIELD_HEIGHT), // Submit button
            Constraint::Length(1),            // Bottom gap
        ])
        .split(column);

    ScreenLayout {
        header: chunks[0],
        state_select: chunks[1],
        city_select: chunks[2],
        submit: chunks[3],
        status_bar,
    }
}

/// Centered rectangle for the dropdown popup: 60% width, 70% height,
/// clamped to the screen.
pub fn popup_area(area: Rect) -> Rect {
    let w = percent_of(area.width, 60)
        .max(40)
        .min(area.width.saturating_sub(4));
    let h = percent_of(area.height, 70)
        .max(10)
        .min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

fn percent_of(len: u16, percent: u32) -> u16 {
    (u32::from(len) * percent / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_stack_above_status_bar() {
        let l = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(l.status_bar, Rect::new(0, 29, 100, 1));
        assert_eq!(l.state_select.height, 3);
        assert_eq!(l.city_select.y, l.state_select.y + 3);
        assert_eq!(l.submit.y, l.city_select.y + 3);
        assert_eq!(l.submit.width, MAX_WIDTH);
        assert!(l.header.height > 0);
    }

    #[test]
    fn test_popup_fits_small_screen() {
        let screen = Rect::new(0, 0, 30, 8);
        let p = popup_area(screen);
        assert!(p.right() <= screen.right());
        assert!(p.bottom() <= screen.bottom());
    }

    #[test]
    fn test_popup_on_very_wide_or_tall_screen() {
        assert_eq!(
            popup_area(Rect::new(0, 0, 1200, 50)),
            Rect::new(240, 7, 720, 35)
        );
        assert_eq!(
            popup_area(Rect::new(0, 0, 60, 1000)),
            Rect::new(10, 150, 40, 700)
        );
    }
}
