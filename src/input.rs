//! Abstract player actions and the FIFO they wait in.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Fire,
    Confirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(Action),
}

/// Translate a physical key into an action.  Unmapped keys give `None`.
///
/// | Action  | Keys              |
/// |---------|-------------------|
/// | Fire    | `w` `W` `↑` space |
/// | Left    | `a` `A` `←`       |
/// | Right   | `d` `D` `→`       |
/// | Confirm | Enter             |
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up | KeyCode::Char(' ') => {
            Some(Action::Fire)
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Action::Right),
        KeyCode::Enter => Some(Action::Confirm),
        _ => None,
    }
}

/// Like [`action_for_key`], but only for presses and auto-repeats.
pub fn action_for_event(event: &KeyEvent) -> Option<Action> {
    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => action_for_key(event.code),
        KeyEventKind::Release => None,
    }
}

/// Inputs in arrival order.  The current phase takes at most one per tick.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn push_action(&mut self, action: Action) {
        self.push(InputEvent::Keyboard(action));
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
