//! Range pane rendering
//!
//! Shows the inspected range's bounds and size, whether each edge sits on a
//! granule boundary, and a bar placing the range inside `[0, heap limit)`.
//! If the range has grown past the heap limit the bar is rescaled to the
//! range's end and the overshoot is flagged.

use super::utils::{bar_cells, border_style, format_bytes};
use crate::memory::{is_aligned, MemoryRange};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the range pane
pub struct RangeRenderData {
    pub range: MemoryRange,
    pub heap_limit: usize,
    pub granule: usize,
    pub step: usize,
}

/// Render the range pane
pub fn render_range_pane(frame: &mut Frame, area: Rect, data: RangeRenderData, is_focused: bool) {
    let block = Block::default()
        .title(" Memory Range ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let range = data.range;
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let number = Style::default().fg(DEFAULT_THEME.number);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("start  ", label),
            Span::styled(format!("0x{:016x}", range.start()), number),
            alignment_span(range.start(), data.granule),
        ]),
        Line::from(vec![
            Span::styled("end    ", label),
            Span::styled(format!("0x{:016x}", range.end()), number),
            alignment_span(range.end(), data.granule),
        ]),
        Line::from(vec![
            Span::styled("size   ", label),
            Span::styled(format!("0x{:x}", range.size()), number),
            Span::styled(
                format!("  ({})", format_bytes(range.size())),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("step   ", label),
            Span::styled(format!("0x{:x}", data.step), number),
            Span::styled(
                format!("  ({})", format_bytes(data.step)),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::default(),
    ];

    // Bar occupies the full inner width (borders + padding = 4 columns)
    let width = area.width.saturating_sub(4) as usize;
    let (before, inside, after) = bar_cells(&range, data.heap_limit, width);
    lines.push(Line::from(vec![
        Span::styled("░".repeat(before), label),
        Span::styled("█".repeat(inside), Style::default().fg(DEFAULT_THEME.range_fill)),
        Span::styled("░".repeat(after), label),
    ]));

    if range.end() > data.heap_limit {
        lines.push(Line::from(Span::styled(
            format!(
                "end is 0x{:x} past the heap limit",
                range.end() - data.heap_limit
            ),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("0", label),
            Span::raw(" ".repeat(width.saturating_sub(1 + format_bytes(data.heap_limit).len()))),
            Span::styled(format_bytes(data.heap_limit), label),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn alignment_span(offset: usize, granule: usize) -> Span<'static> {
    if is_aligned(offset, granule) {
        Span::styled("  granule aligned", Style::default().fg(DEFAULT_THEME.success))
    } else {
        Span::styled(
            format!("  +0x{:x} into granule", offset & (granule - 1)),
            Style::default().fg(DEFAULT_THEME.secondary),
        )
    }
}
