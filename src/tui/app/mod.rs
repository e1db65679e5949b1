//! Terminal handling and the event loop shared by the TUI applications
//!
//! `App` owns the terminal: raw mode and the alternate screen are entered on
//! creation and restored on drop, so an early return or panic unwinding
//! through the app still leaves the shell usable. `TuiApp` is implemented by
//! each application and supplies key handling, drawing and timers; its
//! provided `run` method is the event loop.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::debug;

/// Terminal wrapper with raw mode and alternate screen.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Take over the terminal. `tick_rate` caps how long the event loop
    /// sleeps waiting for input.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Wait up to `timeout` for an event.
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            return Ok(Some(event::read()?));
        }
        Ok(None)
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            debug!(%err, "failed to restore terminal");
        }
    }
}

/// Whether a key is Ctrl-C.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// An application driven by the shared event loop.
pub trait TuiApp {
    /// The underlying terminal.
    fn app(&mut self) -> &mut App;

    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    fn draw(&mut self) -> Result<()>;

    /// Fire due timers. Returns true if anything changed.
    fn tick(&mut self) -> Result<bool>;

    /// Time until the next timer is due, if any.
    fn next_wakeup(&self) -> Option<Duration>;

    fn should_quit(&self) -> bool;

    /// Run until `should_quit` returns true.
    ///
    /// Input is polled with a timeout of the next wakeup (capped by the tick
    /// rate), so timers fire on time without busy-waiting.
    fn run(&mut self) -> Result<()> {
        let mut dirty = true;
        while !self.should_quit() {
            if dirty {
                self.draw()?;
            }
            let tick_rate = self.app().tick_rate();
            let timeout = self
                .next_wakeup()
                .map_or(tick_rate, |wakeup| wakeup.min(tick_rate));

            dirty = false;
            match self.app().poll_event(timeout)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key)?;
                    dirty = true;
                }
                Some(Event::Resize(..)) => dirty = true,
                _ => {}
            }
            dirty |= self.tick()?;
        }
        Ok(())
    }
}
