//! crossterm adapters: keyboard input, frame output and screen setup.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color},
    terminal,
};
use log::warn;

use crate::error::Error;
use crate::game::{InputEvent, InputSource, RenderSink};
use crate::render::{AGENT_GLYPH, Frame, OBSTACLE_GLYPH};

// ── Input ───────────────────────────────────────────────────────────────────

/// Map one key to a game event.
pub fn classify(key: &KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputEvent::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') => InputEvent::Jump,
        _ => InputEvent::None,
    }
}

/// Fold everything typed since the last tick into one event. Quit wins.
pub fn collapse(events: impl IntoIterator<Item = InputEvent>) -> InputEvent {
    events
        .into_iter()
        .fold(InputEvent::None, |acc, ev| match (acc, ev) {
            (InputEvent::Quit, _) | (_, InputEvent::Quit) => InputEvent::Quit,
            (InputEvent::Jump, _) | (_, InputEvent::Jump) => InputEvent::Jump,
            _ => InputEvent::None,
        })
}

/// Non-blocking keyboard reader. Drains the event queue every poll.
#[derive(Debug, Default)]
pub struct Keyboard;

impl InputSource for Keyboard {
    fn poll(&mut self) -> Result<InputEvent, Error> {
        let mut pending = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                pending.push(classify(&key));
            }
        }
        Ok(collapse(pending))
    }
}

// ── Output ──────────────────────────────────────────────────────────────────

/// Redraws each frame in place from the top-left corner.
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for Screen<W> {
    fn display(&mut self, frame: &Frame) -> Result<(), Error> {
        let out = &mut self.out;
        queue!(out, cursor::MoveTo(0, 0))?;
        for row in &frame.rows {
            for ch in row.chars() {
                match ch {
                    AGENT_GLYPH => queue!(
                        out,
                        style::SetForegroundColor(Color::Yellow),
                        style::Print(ch),
                        style::ResetColor
                    )?,
                    OBSTACLE_GLYPH => queue!(
                        out,
                        style::SetForegroundColor(Color::Green),
                        style::Print(ch),
                        style::ResetColor
                    )?,
                    _ => queue!(out, style::Print(ch))?,
                }
            }
            queue!(out, style::Print("\r\n"))?;
        }
        queue!(
            out,
            style::Print(frame.score_line()),
            terminal::Clear(terminal::ClearType::UntilNewLine)
        )?;
        out.flush()?;
        Ok(())
    }
}

// ── Setup ───────────────────────────────────────────────────────────────────

/// Raw mode plus alternate screen for as long as it lives.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )?;
        Ok(Self { restored: false })
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        leave()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = leave() {
                warn!("failed to restore terminal: {e}");
            }
        }
    }
}

fn leave() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()
}
