//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.is_faulted() {
        return handle_key_faulted(key);
    }

    // Global shortcuts
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => return Some(Message::Quit),
        InputKey::CharCtrl('l') => return enabled(state, Focus::LoadModel, Message::LoadModel),
        InputKey::CharCtrl('g') => {
            return enabled(state, Focus::Generate, Message::GenerateImage)
        }
        InputKey::CharCtrl('r') => {
            return enabled(state, Focus::LoadRefiner, Message::LoadRefiner)
        }
        InputKey::CharCtrl('f') => return enabled(state, Focus::Refine, Message::RefineImage),
        InputKey::CharCtrl('u') if state.focus.is_input() => return Some(Message::InputClear),
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        InputKey::Enter => return Some(Message::ActivateFocused),
        _ => {}
    }

    if state.focus.is_input() {
        return match key {
            InputKey::Char(c) => Some(Message::InputChar(c)),
            InputKey::Backspace => Some(Message::InputBackspace),
            _ => None,
        };
    }

    if state.focus == Focus::RefinerSelect {
        match key {
            InputKey::Left => return Some(Message::PrevRefiner),
            InputKey::Right | InputKey::Char(' ') => return Some(Message::NextRefiner),
            _ => {}
        }
    }

    match key {
        InputKey::Char('o') => Some(Message::OpenGeneratedImage),
        InputKey::Char('O') => Some(Message::OpenRefinedImage),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Only reload and quit are available on the fallback screen
fn handle_key_faulted(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') | InputKey::Char('R') => Some(Message::Reload),
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Shortcuts respect the disabled state of the control they stand for
fn enabled(state: &AppState, control: Focus, msg: Message) -> Option<Message> {
    state.is_enabled(control).then_some(msg)
}
