//! Heap limit pane rendering

use super::utils::{border_style, format_bytes};
use crate::ui::app::LimitReport;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the limit pane
pub struct LimitRenderData<'a> {
    pub report: &'a LimitReport,
}

/// Render the limit pane
pub fn render_limit_pane(frame: &mut Frame, area: Rect, data: LimitRenderData, is_focused: bool) {
    let block = Block::default()
        .title(" Heap Limit ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let report = data.report;
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let source = if report.overridden { "--limit" } else { "platform" };
    let ceiling = match report.ceiling {
        Some(bytes) => format!("0x{:x} ({}, {})", bytes, format_bytes(bytes), source),
        None => format!("none ({}), using usize::MAX", source),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("ceiling   ", label),
            Span::styled(ceiling, value),
        ]),
        Line::from(vec![
            Span::styled("fraction  ", label),
            Span::styled(
                format!("1/{}", report.tunables.max_virt_mem_fraction()),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("granule   ", label),
            Span::styled(
                format!(
                    "0x{:x} ({})",
                    report.tunables.granule_size(),
                    format_bytes(report.tunables.granule_size())
                ),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("heap      ", label),
            Span::styled(
                format!(
                    "0x{:x} ({})",
                    report.heap_limit,
                    format_bytes(report.heap_limit)
                ),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
