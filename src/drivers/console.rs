use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::mouse::{ButtonState, MouseButton};
use super::{InputDriver, OutputDriver};
use crate::error::BackendError;
use crate::geometry::{Point, Size};
use crate::surface::Surface;
use crate::ui::UiFrame;

/// Polled input over crossterm's event stream.
///
/// Terminal mouse reporting is event-based, so the driver folds every
/// event into level state (pointer cell, pressed buttons, focus) and
/// answers queries from that state until the next `pump`.
#[derive(Debug, Clone)]
pub struct ConsoleInputDriver {
    pointer: Point,
    buttons: ButtonState,
    focused: bool,
    quit_requested: bool,
}

impl Default for ConsoleInputDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self {
            pointer: Point::ORIGIN,
            buttons: ButtonState::NONE,
            focused: true,
            quit_requested: false,
        }
    }

    /// Fold one terminal event into the current input state.
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(mouse) => {
                self.pointer = Point::new(i32::from(mouse.column), i32::from(mouse.row));
                match mouse.kind {
                    MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                        self.buttons.set(MouseButton::from(button), true);
                    }
                    MouseEventKind::Up(button) => {
                        self.buttons.set(MouseButton::from(button), false);
                    }
                    // Motion without a button means any release was missed.
                    MouseEventKind::Moved => self.buttons = ButtonState::NONE,
                    _ => {}
                }
            }
            Event::FocusGained => self.focused = true,
            Event::FocusLost => self.focused = false,
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) =>
            {
                self.quit_requested = true;
            }
            _ => {}
        }
    }

    /// Returns `true` once after Ctrl+C or Ctrl+Q was seen.
    pub fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }
}

impl InputDriver for ConsoleInputDriver {
    fn pump(&mut self) -> Result<(), BackendError> {
        while crossterm::event::poll(Duration::ZERO)? {
            let event = crossterm::event::read()?;
            self.apply_event(&event);
        }
        Ok(())
    }

    fn pointer_position(&mut self) -> Result<Point, BackendError> {
        Ok(self.pointer)
    }

    fn button_state(&mut self) -> Result<ButtonState, BackendError> {
        Ok(self.buttons)
    }

    fn has_focus(&mut self) -> Result<bool, BackendError> {
        Ok(self.focused)
    }
}

pub struct ConsoleOutputDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl ConsoleOutputDriver {
    pub fn new() -> Result<Self, BackendError> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }
}

impl OutputDriver for ConsoleOutputDriver {
    fn enter(&mut self) -> Result<(), BackendError> {
        if self.entered {
            return Ok(());
        }
        execute!(
            self.terminal.backend_mut(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        terminal::enable_raw_mode()?;
        self.terminal.hide_cursor()?;
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<(), BackendError> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }

    fn size(&self) -> Result<Size, BackendError> {
        let size = self
            .terminal
            .size()
            .map_err(|err| BackendError::Render(err.to_string()))?;
        Ok(Size::new(size.width, size.height))
    }

    fn present(&mut self, surface: &Surface, origin: Point) -> Result<(), BackendError> {
        self.terminal
            .draw(|frame| {
                let mut ui = UiFrame::new(frame);
                ui.blit_surface(surface, origin);
            })
            .map(|_| ())
            .map_err(|err| BackendError::Render(err.to_string()))
    }
}

impl Drop for ConsoleOutputDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
