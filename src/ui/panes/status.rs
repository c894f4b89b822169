//! Status bar rendering with keybindings and history position

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub position: usize,
    pub total: usize,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: history position and status
    let left_spans = vec![
        Span::styled(
            format!(" State {}/{} ", data.position + 1, data.total),
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" f/F ", key_style),
        Span::styled(" front ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" b/B ", key_style),
        Span::styled(" back ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ←/→ ", key_style),
        Span::styled(" undo/redo ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if data.position == 0 {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if data.position + 1 < data.total {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " UNDONE ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
