//! Dropdown fields and the popup list they open.

use crate::app::state::{AppState, FocusField, LoadStatus, SelectOption};
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthChar;

fn field_label(field: FocusField) -> &'static str {
    match field {
        FocusField::State => " Estado (UF) ",
        _ => " Cidade ",
    }
}

/// Closed dropdown: current value, placeholder, or the list's load status.
pub fn render_field(frame: &mut Frame, area: Rect, state: &AppState, field: FocusField) {
    let focused = state.focus == field && state.popup.is_none();
    let block = Block::default()
        .title(field_label(field))
        .title_style(Theme::field_label())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 3 || inner.height == 0 {
        return;
    }

    let Some(list) = state.list_for(field) else {
        return;
    };
    let selected = state.selected_value(field);

    let (text, style) = match &list.status {
        LoadStatus::Loading => (format!("{} loading...", state.spinner()), Theme::loading()),
        LoadStatus::Failed(reason) => (
            format!("failed: {} (press r to retry)", reason),
            Theme::error(),
        ),
        _ if !selected.is_empty() => (selected.to_string(), Theme::value()),
        LoadStatus::Loaded if list.options.is_empty() => {
            ("no results".to_string(), Theme::placeholder())
        }
        _ => (state.placeholder_for(field).to_string(), Theme::placeholder()),
    };

    // Value on the left, arrow on the right
    let text_width = inner.width.saturating_sub(2) as usize;
    let line = Line::from(Span::styled(truncate(&text, text_width), style));
    frame.render_widget(Paragraph::new(line), inner);
    let arrow = Rect::new(inner.right() - 1, inner.y, 1, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("▾", Theme::field_label())),
        arrow,
    );
}

/// Open dropdown list drawn over the screen. The first row is the
/// placeholder, which clears the selection.
pub fn render_popup(frame: &mut Frame, state: &AppState) {
    let Some(popup) = state.popup else { return };
    let Some(list) = state.list_for(popup.field) else {
        return;
    };

    let area = layout::popup_area(frame.area());
    frame.render_widget(Clear, area);

    let title = format!(
        " {}— {} options ",
        field_label(popup.field).trim_start(),
        list.options.len()
    );
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .title_bottom(Line::from(" ↑↓ Move  Enter Select  Esc Close ").centered())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let width = block.inner(area).width.saturating_sub(2) as usize;
    let selected = state.selected_value(popup.field);

    let placeholder = SelectOption::placeholder(state.placeholder_for(popup.field));
    let items: Vec<ListItem> = std::iter::once(&placeholder)
        .chain(list.options.iter())
        .map(|opt| {
            if opt.is_placeholder() {
                return ListItem::new(Span::styled(
                    truncate(&opt.label, width),
                    Theme::placeholder(),
                ));
            }
            let marker = if opt.value.as_deref() == Some(selected) {
                "• "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Theme::field_label()),
                Span::styled(
                    truncate(&opt.label, width.saturating_sub(2)),
                    Theme::value(),
                ),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(Theme::highlight())
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(popup.highlighted));
    frame.render_stateful_widget(widget, area, &mut list_state);
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with
/// an ellipsis.
pub fn truncate(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    let mut out = out.trim_end().to_string();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Campinas", 10), "Campinas");
        assert_eq!(truncate("Campinas", 8), "Campinas");
        assert_eq!(truncate("São José do Rio Preto", 10), "São José…");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 0), "");
    }
}
