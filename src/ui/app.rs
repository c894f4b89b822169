//! Main TUI application state and logic

use crate::config::Tunables;
use crate::history::{RangeHistory, RangeOp};
use crate::ui::panes::{
    render_history_pane, render_limit_pane, render_range_pane, render_status_bar,
    HistoryRenderData, LimitRenderData, RangeRenderData, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Range,
    History,
    Limit,
}

impl FocusedPane {
    /// Move focus to the next pane (range -> history -> limit)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Range => FocusedPane::History,
            FocusedPane::History => FocusedPane::Limit,
            FocusedPane::Limit => FocusedPane::Range,
        }
    }
}

/// The heap limit computed at startup and the inputs that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitReport {
    pub ceiling: Option<usize>,
    /// Whether the ceiling came from `--limit` rather than the platform
    pub overridden: bool,
    pub tunables: Tunables,
    pub heap_limit: usize,
}

/// The main application state
pub struct App {
    /// Edits applied to the inspected range
    pub history: RangeHistory,

    pub limit: LimitReport,

    /// Bytes moved by each edit
    pub step: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset of the history pane
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a refused edit
    pub is_error: bool,
}

impl App {
    /// Create a new app; the edit step starts at one granule
    pub fn new(history: RangeHistory, limit: LimitReport) -> Self {
        App {
            history,
            step: limit.tunables.granule_size(),
            limit,
            focused_pane: FocusedPane::Range,
            history_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Range (top) | Limit (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        render_range_pane(
            frame,
            left_rows[0],
            RangeRenderData {
                range: self.history.current(),
                heap_limit: self.limit.heap_limit,
                granule: self.limit.tunables.granule_size(),
                step: self.step,
            },
            self.focused_pane == FocusedPane::Range,
        );

        render_limit_pane(
            frame,
            left_rows[1],
            LimitRenderData {
                report: &self.limit,
            },
            self.focused_pane == FocusedPane::Limit,
        );

        render_history_pane(
            frame,
            columns[1],
            HistoryRenderData {
                history: &self.history,
            },
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                is_error: self.is_error,
                position: self.history.position(),
                total: self.history.len(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('f') => self.edit(RangeOp::ShrinkFromFront(self.step)),
            KeyCode::Char('F') => self.edit(RangeOp::GrowFromFront(self.step)),
            KeyCode::Char('b') => self.edit(RangeOp::ShrinkFromBack(self.step)),
            KeyCode::Char('B') => self.edit(RangeOp::GrowFromBack(self.step)),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                match self.step.checked_mul(2) {
                    Some(step) => {
                        self.step = step;
                        self.set_status(format!("Step is now 0x{:x}", self.step), false);
                    }
                    None => self.set_status("Step is already at its maximum".to_string(), true),
                }
            }
            KeyCode::Char('-') => {
                self.step = (self.step / 2).max(1);
                self.set_status(format!("Step is now 0x{:x}", self.step), false);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => match self.history.step_backward() {
                Ok(range) => self.set_status(format!("Stepped back to {}", range), false),
                Err(e) => self.set_status(format!("Cannot step backward: {}", e), true),
            },
            KeyCode::Right => match self.history.step_forward() {
                Ok(range) => self.set_status(format!("Stepped forward to {}", range), false),
                Err(e) => self.set_status(format!("Cannot step forward: {}", e), true),
            },
            KeyCode::Backspace => {
                self.history.rewind_to_start();
                self.set_status("Jumped to start".to_string(), false);
            }
            KeyCode::Enter => {
                self.history.jump_to_end();
                self.set_status("Jumped to end".to_string(), false);
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::History {
                    self.history_scroll = self.history_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::History {
                    self.history_scroll = self.history_scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    /// Apply an edit, refusing it if the range would be invalidated
    fn edit(&mut self, op: RangeOp) {
        match self.history.apply(op) {
            Ok(range) => {
                let message = match self.history.first_seen(&range) {
                    Some(index) if index < self.history.position() => {
                        format!("{} -> {} (same as #{})", op, range, index)
                    }
                    _ => format!("{} -> {}", op, range),
                };
                self.set_status(message, false);
                // Keep the newest entry in view
                self.history_scroll = usize::MAX;
            }
            Err(e) => self.set_status(format!("Refused {}: {}", op, e), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.is_error = is_error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRange;

    fn app_for(range: MemoryRange) -> App {
        let tunables = Tunables::new(2, 16).expect("valid tunables");
        App::new(
            RangeHistory::new(range),
            LimitReport {
                ceiling: Some(1 << 20),
                overridden: true,
                tunables,
                heap_limit: 1 << 19,
            },
        )
    }

    #[test]
    fn test_step_starts_at_granule() {
        let app = app_for(MemoryRange::new(64, 64));
        assert_eq!(app.step, 16);
    }

    #[test]
    fn test_edit_keys() {
        let mut app = app_for(MemoryRange::new(64, 64));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('f')));
        assert_eq!(app.history.current(), MemoryRange::new(80, 48));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('F')));
        assert_eq!(app.history.current(), MemoryRange::new(64, 64));
        assert!(app.status_message.contains("same as #0"));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('b')));
        assert_eq!(app.history.current(), MemoryRange::new(64, 48));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('B')));
        assert_eq!(app.history.current(), MemoryRange::new(64, 64));
        assert!(!app.is_error);
    }

    #[test]
    fn test_refused_edit_keeps_range() {
        let mut app = app_for(MemoryRange::new(8, 16));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('f')));
        assert!(app.is_error);
        assert_eq!(app.history.current(), MemoryRange::new(8, 16));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('F')));
        assert!(app.is_error);
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_step_size_keys() {
        let mut app = app_for(MemoryRange::new(0, 64));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('+')));
        assert_eq!(app.step, 32);
        app.handle_key_event(KeyEvent::from(KeyCode::Char('-')));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('-')));
        assert_eq!(app.step, 8);
    }

    #[test]
    fn test_undo_redo_keys() {
        let mut app = app_for(MemoryRange::new(0, 64));
        app.handle_key_event(KeyEvent::from(KeyCode::Char('B')));
        app.handle_key_event(KeyEvent::from(KeyCode::Left));
        assert_eq!(app.history.current(), MemoryRange::new(0, 64));
        app.handle_key_event(KeyEvent::from(KeyCode::Left));
        assert!(app.is_error);
        app.handle_key_event(KeyEvent::from(KeyCode::Right));
        assert_eq!(app.history.current(), MemoryRange::new(0, 80));
    }
}
