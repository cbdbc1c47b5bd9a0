//! Terminal event polling
//!
//! Key presses become [`Message::Key`]; a quiet poll becomes a tick. Bursts
//! of resize notifications are coalesced into one redraw. A burst longer
//! than [`RESIZE_BURST_LIMIT`] is reported as [`Error::ResizeLoop`], which
//! the run loop drops through its noise filter.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use sdxs_app::input_key::InputKey;
use sdxs_app::Message;
use sdxs_core::prelude::*;

/// Poll timeout; a tick is emitted when nothing arrives (20 FPS)
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Resize notifications coalesced into a single frame before giving up
pub const RESIZE_BURST_LIMIT: usize = 32;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None, // Unsupported keys ignored
    }
}

/// Source of raw terminal events
pub trait EventReader {
    fn poll(&mut self, timeout: Duration) -> std::io::Result<bool>;
    fn read(&mut self) -> std::io::Result<Event>;
}

/// Reads from the real terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventReader for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> std::io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> std::io::Result<Event> {
        event::read()
    }
}

/// Turns raw events into messages
#[derive(Debug)]
pub struct EventSource<R> {
    reader: R,
    /// Event read while draining a resize burst, delivered next poll
    pending: Option<Event>,
}

impl EventSource<CrosstermEvents> {
    pub fn terminal() -> Self {
        Self::new(CrosstermEvents)
    }
}

impl<R: EventReader> EventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    /// Poll for the next message.
    ///
    /// `Ok(None)` means an event arrived that needs no handling beyond the
    /// next redraw.
    pub fn poll(&mut self) -> Result<Option<Message>> {
        let event = match self.pending.take() {
            Some(event) => event,
            None => {
                if !self.reader.poll(TICK_RATE)? {
                    // Generate tick on timeout for animations
                    return Ok(Some(Message::Tick));
                }
                self.reader.read()?
            }
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Resize(..) => self.coalesce_resizes(),
            _ => Ok(None),
        }
    }

    /// Swallow resize events already queued behind the first one.
    ///
    /// The terminal resizes itself on the next draw, so one redraw covers
    /// the whole burst.
    fn coalesce_resizes(&mut self) -> Result<Option<Message>> {
        let mut coalesced = 0;
        while self.reader.poll(Duration::ZERO)? {
            match self.reader.read()? {
                Event::Resize(..) => {
                    coalesced += 1;
                    if coalesced >= RESIZE_BURST_LIMIT {
                        return Err(Error::ResizeLoop {
                            undelivered: coalesced,
                        });
                    }
                }
                other => {
                    self.pending = Some(other);
                    break;
                }
            }
        }
        if coalesced > 0 {
            trace!("Coalesced {} resize events", coalesced);
        }
        Ok(None)
    }
}
