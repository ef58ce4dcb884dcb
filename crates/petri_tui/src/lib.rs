//! Terminal rendering for the display worker.
//!
//! Consumes read-only [`petri_data::GlobalGrid`] snapshots; nothing in here
//! touches the engine or its channels.

pub mod renderer;

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

use petri_data::GlobalGrid;
use renderer::GridWidget;

pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    pub fn init(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Renders one grid snapshot with an iteration counter in the title.
    pub fn draw(&mut self, grid: &GlobalGrid, iteration: u64) -> Result<()> {
        self.terminal.draw(|frame| {
            frame.render_widget(GridWidget::new(grid, iteration), frame.area());
        })?;
        Ok(())
    }

    /// Drains pending input for up to `budget`, reporting whether the user
    /// asked to quit (`q`, `Esc`, or Ctrl-C). This is the display worker's
    /// sole source of the stop signal.
    pub fn poll_quit(&self, budget: Duration) -> Result<bool> {
        let mut quit = false;
        let deadline = std::time::Instant::now() + budget;
        loop {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
                    quit = true;
                }
            }
        }
        Ok(quit)
    }

    pub fn exit(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}
