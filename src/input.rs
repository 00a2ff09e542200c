//! Keyboard polling — turns crossterm key events into the per-frame
//! direction bitmask and fire flag, plus one-shot host actions.
//!
//! Input model: instead of acting on each key event individually, we keep
//! the frame number of the last press/repeat event for every key. A key is
//! "held" while that event is fresh (within `HOLD_WINDOW` frames) or until a
//! release event arrives on terminals that report them.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use star_raid::entities::{Direction, ExplosionTarget};

/// A key stays live this many frames after its last press/repeat. The OS
/// key-repeat rate is ≥ 15 Hz, so at 60 FPS a window of 8 frames (≈133 ms)
/// is refreshed before it expires.
const HOLD_WINDOW: u64 = 8;

/// One-shot actions triggered on key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Explode(ExplosionTarget),
}

#[derive(Debug, Default)]
pub struct InputTracker {
    key_frame: HashMap<KeyCode, u64>,
}

impl InputTracker {
    /// Record a key event seen during `frame`.
    pub fn record(&mut self, event: KeyEvent, frame: u64) -> Option<KeyAction> {
        let KeyEvent {
            code,
            kind,
            modifiers,
            ..
        } = event;
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(normalise(code), frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(KeyAction::Quit)
                    }
                    KeyCode::Enter => Some(KeyAction::Explode(ExplosionTarget::Avatar)),
                    KeyCode::Tab => Some(KeyAction::Explode(ExplosionTarget::Secondary)),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(normalise(code), frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&normalise(code));
                None
            }
        }
    }

    /// Direction bitmask and fire flag for `frame`.
    pub fn sample(&self, frame: u64) -> (Direction, bool) {
        let mut direction = Direction::NONE;
        if self.held(KeyCode::Up, frame) || self.held(KeyCode::Char('w'), frame) {
            direction |= Direction::FORWARD;
        }
        if self.held(KeyCode::Down, frame) || self.held(KeyCode::Char('s'), frame) {
            direction |= Direction::BACKWARD;
        }
        if self.held(KeyCode::Left, frame) || self.held(KeyCode::Char('a'), frame) {
            direction |= Direction::LEFT;
        }
        if self.held(KeyCode::Right, frame) || self.held(KeyCode::Char('d'), frame) {
            direction |= Direction::RIGHT;
        }
        (direction, self.held(KeyCode::Char(' '), frame))
    }

    fn held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

/// Letter keys are tracked lower-case so Shift doesn't split a held key.
fn normalise(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
