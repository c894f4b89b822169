use crate::memory::MemoryRange;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Border style for a pane, highlighted when focused
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Format a byte count with a binary unit, e.g. `2 MiB` or `1.5 GiB`
pub(crate) fn format_bytes(bytes: usize) -> String {
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else if value.fract() == 0.0 {
        format!("{} {}", value as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Split a bar of `width` cells into (before, inside, after) cell counts,
/// scaling `range` against `[0, scale)`.
///
/// A non-empty range always gets at least one cell.
pub(crate) fn bar_cells(range: &MemoryRange, scale: usize, width: usize) -> (usize, usize, usize) {
    if width == 0 {
        return (0, 0, 0);
    }
    let scale = scale.max(range.end()).max(1) as u128;
    let to_cell = |offset: usize| ((offset as u128 * width as u128) / scale) as usize;

    let first = to_cell(range.start()).min(width);
    let mut last = to_cell(range.end()).min(width);
    if !range.is_empty() && last == first {
        if first < width {
            last = first + 1;
        } else {
            return (width - 1, 1, 0);
        }
    }
    (first, last - first, width - last)
}
