//! The phone's single source of truth and its key dispatcher.
//!
//! `PhoneState` owns everything the renderer may read: current screen, menu
//! cursor, the three text buffers, and the displayed clock. All mutation
//! goes through [`PhoneState::handle_key`] and [`PhoneState::set_clock`] —
//! pure transitions, no I/O, unit-testable without a rendering harness.

use platform::Key;

use crate::calc;
use crate::clock::ClockValue;
use crate::menu;
use crate::screen::Screen;

/// What the calculator shows when evaluation fails.
pub const EVAL_ERROR_LABEL: &str = "Ошибка";

/// Maximum dialed-number length, in bytes.
pub const DIALER_CAP: usize = 24;

/// Maximum SMS draft length, in bytes (the classic single-message limit).
pub const SMS_CAP: usize = 160;

/// Complete phone state. One instance per simulator run; nothing else holds
/// state the dispatcher does not control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneState {
    screen: Screen,
    selected: usize,
    dialer: heapless::String<DIALER_CAP>,
    calc: heapless::String<{ calc::BUFFER_CAP }>,
    sms: heapless::String<SMS_CAP>,
    clock: ClockValue,
}

impl PhoneState {
    /// A freshly powered-on phone: locked, menu cursor at the top,
    /// calculator showing its placeholder zero.
    #[must_use]
    pub fn new(clock: ClockValue) -> Self {
        let mut calc = heapless::String::new();
        calc.push('0').ok();
        PhoneState {
            screen: Screen::Lock,
            selected: 0,
            dialer: heapless::String::new(),
            calc,
            sms: heapless::String::new(),
            clock,
        }
    }

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Menu cursor position. Meaningful only while on [`Screen::Menu`].
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The dialed number so far. Persists across navigation.
    #[must_use]
    pub fn dialer(&self) -> &str {
        &self.dialer
    }

    /// The calculator buffer: expression, last result, or the error marker.
    #[must_use]
    pub fn calc(&self) -> &str {
        &self.calc
    }

    /// The SMS draft. No key handler mutates it in this version; the screen
    /// shows the empty-draft placeholder.
    #[must_use]
    pub fn sms(&self) -> &str {
        &self.sms
    }

    /// The displayed clock.
    #[must_use]
    pub fn clock(&self) -> ClockValue {
        self.clock
    }

    /// Replace the displayed clock. Called once per second by the ticker.
    pub fn set_clock(&mut self, clock: ClockValue) {
        self.clock = clock;
    }

    /// Apply one key press. First matching rule wins:
    ///
    /// 1. Lock: only Select leaves, to Home.
    /// 2. Home: Select opens the menu with the cursor reset; Back locks.
    /// 3. Menu: Up/Down move the cursor with wraparound, Select opens the
    ///    highlighted entry, Back returns to Home.
    /// 4. Back anywhere else returns to the menu.
    /// 5. Dialer consumes digits, `*`, `#`.
    /// 6. Calculator consumes digits and `+ - * / =`.
    /// 7. Everything else — including the decorative call keys — is a no-op.
    // Cursor arithmetic is bounded by the match arms (0 and LAST are handled
    // explicitly); buffer appends are silent no-ops at capacity.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn handle_key(&mut self, key: Key) {
        match self.screen {
            Screen::Lock => {
                if key == Key::Select {
                    self.screen = Screen::Home;
                }
            }
            Screen::Home => match key {
                Key::Select => {
                    self.screen = Screen::Menu;
                    self.selected = 0;
                }
                Key::Back => self.screen = Screen::Lock,
                _ => {}
            },
            Screen::Menu => match key {
                Key::Up => {
                    self.selected = match self.selected {
                        0 => menu::LAST,
                        n => n - 1,
                    };
                }
                Key::Down => {
                    self.selected = match self.selected {
                        menu::LAST.. => 0,
                        n => n + 1,
                    };
                }
                Key::Select => {
                    if let Some(entry) = menu::MENU.get(self.selected) {
                        self.screen = entry.target;
                    }
                }
                Key::Back => self.screen = Screen::Home,
                _ => {}
            },
            _ => {
                if key == Key::Back {
                    self.screen = Screen::Menu;
                    return;
                }
                match self.screen {
                    Screen::Dialer => {
                        if let Some(c) = dialer_char(key) {
                            self.dialer.push(c).ok();
                        }
                    }
                    Screen::Calculator => self.calculator_key(key),
                    _ => {}
                }
            }
        }
    }

    fn calculator_key(&mut self, key: Key) {
        let Some(c) = calc_char(key) else {
            return;
        };
        if c == '=' {
            let outcome = calc::evaluate(&self.calc).and_then(calc::format_result);
            self.calc = match outcome {
                Ok(rendered) => rendered,
                Err(_) => {
                    let mut marker = heapless::String::new();
                    marker.push_str(EVAL_ERROR_LABEL).ok();
                    marker
                }
            };
        } else if self.calc.as_str() == "0" {
            // The placeholder zero is replaced by the first key, not
            // appended to.
            self.calc.clear();
            self.calc.push(c).ok();
        } else {
            self.calc.push(c).ok();
        }
    }
}

/// Characters the dialer accepts.
fn dialer_char(key: Key) -> Option<char> {
    match key {
        Key::Digit(d) => char::from_digit(u32::from(d), 10),
        Key::Star => Some('*'),
        Key::Hash => Some('#'),
        _ => None,
    }
}

/// Characters the calculator accepts (`=` included; `#` is not).
fn calc_char(key: Key) -> Option<char> {
    match key {
        Key::Digit(d) => char::from_digit(u32::from(d), 10),
        Key::Plus => Some('+'),
        Key::Minus => Some('-'),
        Key::Star => Some('*'),
        Key::Divide => Some('/'),
        Key::Equals => Some('='),
        _ => None,
    }
}
