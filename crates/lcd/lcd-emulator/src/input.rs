//! Keyboard and mouse input for the desktop emulator.
//!
//! This module provides:
//!
//! - [`InputQueue`] — producer, owned by the winit window.
//! - [`EmulatorInput`] — consumer, returned by `Emulator::input_receiver()`.
//!   Implements [`platform::InputDevice`] so application code never sees
//!   winit.
//!
//! # Key mapping
//!
//! | Key(s)                  | Phone key                |
//! |-------------------------|--------------------------|
//! | ↑                       | [`Key::Up`]              |
//! | ↓                       | [`Key::Down`]            |
//! | Enter, Numpad Enter     | [`Key::Select`]          |
//! | Backspace, Esc, C       | [`Key::Back`]            |
//! | M                       | [`Key::Menu`]            |
//! | 0–9, Numpad 0–9         | [`Key::Digit`]           |
//! | Shift+8, Numpad `*`     | [`Key::Star`]            |
//! | Shift+3                 | [`Key::Hash`]            |
//! | Shift+`=`, Numpad `+`   | [`Key::Plus`]            |
//! | `-`, Numpad `-`         | [`Key::Minus`]           |
//! | `/`, Numpad `/`         | [`Key::Divide`]          |
//! | `=`                     | [`Key::Equals`]          |
//!
//! Mouse clicks on the keypad bezel are mapped by
//! [`Keypad::hit_test`](crate::keypad::Keypad::hit_test), including the two
//! decorative call keys.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use platform::{InputDevice, InputEvent, Key};
use winit::keyboard::KeyCode;

/// Maximum number of unread events buffered in the queue.
///
/// Oldest events are silently dropped when the queue is full.
// In headless mode window.rs is excluded, so the push/map helpers appear
// unused to the compiler even though tests exercise them.
#[cfg_attr(feature = "headless", allow(dead_code))]
const QUEUE_CAP: usize = 64;

// ---------------------------------------------------------------------------
// InputQueue — producer (owned by the winit event loop inside Window)
// ---------------------------------------------------------------------------

/// Producer half of the input pipe.
///
/// Lives on the window and is populated by `WindowEvent::KeyboardInput` and
/// `WindowEvent::MouseInput` handlers.
#[cfg_attr(feature = "headless", allow(dead_code))]
pub(crate) struct InputQueue {
    queue: Arc<Mutex<VecDeque<InputEvent>>>,
}

#[cfg_attr(feature = "headless", allow(dead_code))]
impl InputQueue {
    /// Create a linked (producer, consumer) pair.
    pub fn new() -> (Self, EmulatorInput) {
        let q = Arc::new(Mutex::new(VecDeque::new()));
        (InputQueue { queue: q.clone() }, EmulatorInput { queue: q })
    }

    /// Enqueue an event. Silently drops the event if the queue is full.
    pub fn push(&self, event: InputEvent) {
        if let Ok(mut q) = self.queue.lock() {
            if q.len() < QUEUE_CAP {
                q.push_back(event);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EmulatorInput — consumer (returned to application code)
// ---------------------------------------------------------------------------

/// Consumer half of the input pipe.
///
/// Implements [`platform::InputDevice`], so the simulator loop reads phone
/// keys without knowing where they came from.
pub struct EmulatorInput {
    queue: Arc<Mutex<VecDeque<InputEvent>>>,
}

impl InputDevice for EmulatorInput {
    /// Async wait: polls the queue every 5 ms until an event is available.
    async fn wait_for_event(&mut self) -> InputEvent {
        loop {
            if let Some(e) = self.poll_event() {
                return e;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.lock().ok()?.pop_front()
    }
}

// ---------------------------------------------------------------------------
// Key mapping
// ---------------------------------------------------------------------------

/// Map a physical key code (plus the shift state) to a phone key.
///
/// Returns `None` for keys that have no mapping; they are silently ignored.
#[cfg_attr(feature = "headless", allow(dead_code))]
#[must_use]
pub(crate) fn map_key(code: KeyCode, shift: bool) -> Option<Key> {
    let key = match (code, shift) {
        (KeyCode::ArrowUp, _) => Key::Up,
        (KeyCode::ArrowDown, _) => Key::Down,
        (KeyCode::Enter | KeyCode::NumpadEnter, _) => Key::Select,
        (KeyCode::Backspace | KeyCode::Escape | KeyCode::KeyC, _) => Key::Back,
        (KeyCode::KeyM, _) => Key::Menu,

        (KeyCode::Digit8, true) | (KeyCode::NumpadMultiply, _) => Key::Star,
        (KeyCode::Digit3, true) => Key::Hash,
        (KeyCode::Equal, true) | (KeyCode::NumpadAdd, _) => Key::Plus,
        (KeyCode::Equal, false) => Key::Equals,
        (KeyCode::Minus | KeyCode::NumpadSubtract, _) => Key::Minus,
        (KeyCode::Slash | KeyCode::NumpadDivide, _) => Key::Divide,

        (KeyCode::Digit0 | KeyCode::Numpad0, _) => Key::Digit(0),
        (KeyCode::Digit1 | KeyCode::Numpad1, _) => Key::Digit(1),
        (KeyCode::Digit2 | KeyCode::Numpad2, _) => Key::Digit(2),
        (KeyCode::Digit3, false) | (KeyCode::Numpad3, _) => Key::Digit(3),
        (KeyCode::Digit4 | KeyCode::Numpad4, _) => Key::Digit(4),
        (KeyCode::Digit5 | KeyCode::Numpad5, _) => Key::Digit(5),
        (KeyCode::Digit6 | KeyCode::Numpad6, _) => Key::Digit(6),
        (KeyCode::Digit7 | KeyCode::Numpad7, _) => Key::Digit(7),
        (KeyCode::Digit8, false) | (KeyCode::Numpad8, _) => Key::Digit(8),
        (KeyCode::Digit9 | KeyCode::Numpad9, _) => Key::Digit(9),

        _ => return None,
    };
    Some(key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]
    use super::*;

    #[test]
    fn map_key_navigation() {
        assert_eq!(map_key(KeyCode::ArrowUp, false), Some(Key::Up));
        assert_eq!(map_key(KeyCode::Enter, false), Some(Key::Select));
        assert_eq!(map_key(KeyCode::Escape, false), Some(Key::Back));
        assert_eq!(map_key(KeyCode::KeyM, false), Some(Key::Menu));
    }

    #[test]
    fn map_key_digits() {
        assert_eq!(map_key(KeyCode::Digit0, false), Some(Key::Digit(0)));
        assert_eq!(map_key(KeyCode::Numpad7, false), Some(Key::Digit(7)));
    }

    #[test]
    fn map_key_shift_layer() {
        // Shift+8 = '*', Shift+3 = '#', Shift+'=' = '+'.
        assert_eq!(map_key(KeyCode::Digit8, true), Some(Key::Star));
        assert_eq!(map_key(KeyCode::Digit8, false), Some(Key::Digit(8)));
        assert_eq!(map_key(KeyCode::Digit3, true), Some(Key::Hash));
        assert_eq!(map_key(KeyCode::Equal, true), Some(Key::Plus));
        assert_eq!(map_key(KeyCode::Equal, false), Some(Key::Equals));
    }

    #[test]
    fn map_key_operators() {
        assert_eq!(map_key(KeyCode::Minus, false), Some(Key::Minus));
        assert_eq!(map_key(KeyCode::Slash, false), Some(Key::Divide));
        assert_eq!(map_key(KeyCode::NumpadMultiply, false), Some(Key::Star));
        assert_eq!(map_key(KeyCode::NumpadAdd, true), Some(Key::Plus));
    }

    #[test]
    fn map_key_unmapped_returns_none() {
        assert_eq!(map_key(KeyCode::F1, false), None);
        assert_eq!(map_key(KeyCode::Tab, false), None);
        assert_eq!(map_key(KeyCode::Space, false), None);
    }

    #[test]
    fn input_queue_push_and_poll() {
        let (producer, mut consumer) = InputQueue::new();
        producer.push(InputEvent::KeyPress(Key::Menu));
        assert_eq!(
            consumer.poll_event(),
            Some(InputEvent::KeyPress(Key::Menu))
        );
        assert_eq!(consumer.poll_event(), None);
    }

    #[test]
    fn input_queue_capacity_limit() {
        let (producer, mut consumer) = InputQueue::new();
        // Fill beyond capacity
        for _ in 0..QUEUE_CAP + 10 {
            producer.push(InputEvent::KeyPress(Key::Select));
        }
        let mut count = 0;
        while consumer.poll_event().is_some() {
            count += 1;
        }
        assert_eq!(count, QUEUE_CAP);
    }

    #[tokio::test]
    async fn wait_for_event_returns_queued() {
        let (producer, mut consumer) = InputQueue::new();
        producer.push(InputEvent::KeyRelease(Key::Hash));
        assert_eq!(
            consumer.wait_for_event().await,
            InputEvent::KeyRelease(Key::Hash)
        );
    }
}
