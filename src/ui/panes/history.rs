//! History pane rendering
//!
//! Lists every recorded state, newest last. The current position is
//! highlighted; entries equal to an earlier state are marked with the index
//! they restore.

use super::utils::border_style;
use crate::history::RangeHistory;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Data needed to render the history pane
pub struct HistoryRenderData<'a> {
    pub history: &'a RangeHistory,
}

/// Render the history pane
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    data: HistoryRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let history = data.history;
    let all_items: Vec<ListItem> = history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let op = match entry.op {
                Some(op) => op.to_string(),
                None => "initial".to_string(),
            };
            let mut spans = vec![
                Span::styled(format!("{:>4} ", i), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(op, Style::default().fg(DEFAULT_THEME.primary)),
                Span::raw(" "),
                Span::styled(entry.range.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ];
            if let Some(first) = history.first_seen(&entry.range).filter(|&first| first < i) {
                spans.push(Span::styled(
                    format!(" = #{}", first),
                    Style::default().fg(DEFAULT_THEME.range_restored),
                ));
            }

            let item = ListItem::new(Line::from(spans));
            if i == history.position() {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
