//! Every screen renders, and rendering is a pure function of state.

use lcd_testing::TestLcd;
use phone_ui::{render, LCD_HEIGHT, LCD_WIDTH};
use platform::Key;
use ui::clock::{CalendarDate, ClockValue, TimeOfDay};
use ui::state::PhoneState;

fn lcd() -> TestLcd {
    TestLcd::new(LCD_WIDTH, LCD_HEIGHT)
}

fn sample_clock() -> ClockValue {
    ClockValue {
        time: TimeOfDay::new(12, 30, 0),
        date: CalendarDate::new(7, 8, 2026),
    }
}

fn state_on_menu_entry(index: usize) -> PhoneState {
    let mut state = PhoneState::new(sample_clock());
    state.handle_key(Key::Select); // Lock → Home
    state.handle_key(Key::Select); // Home → Menu
    for _ in 0..index {
        state.handle_key(Key::Down);
    }
    state.handle_key(Key::Select);
    state
}

#[test]
fn every_screen_draws_ink() {
    // Lock, Home, Menu
    let mut state = PhoneState::new(sample_clock());
    for _ in 0..3 {
        let mut panel = lcd();
        render(&state, &mut panel).unwrap();
        assert!(panel.ink_count() > 0, "{:?} drew nothing", state.screen());
        state.handle_key(Key::Select);
    }

    // All seven menu targets
    for index in 0..7 {
        let state = state_on_menu_entry(index);
        let mut panel = lcd();
        render(&state, &mut panel).unwrap();
        assert!(panel.ink_count() > 0, "{:?} drew nothing", state.screen());
    }
}

#[test]
fn rendering_twice_is_identical() {
    for index in 0..7 {
        let state = state_on_menu_entry(index);
        let mut panel = lcd();
        render(&state, &mut panel).unwrap();
        let first = panel.snapshot();
        render(&state, &mut panel).unwrap();
        assert_eq!(first, panel.snapshot(), "{:?} not pure", state.screen());
    }
}

#[test]
fn menu_cursor_moves_the_highlight() {
    let mut state = PhoneState::new(sample_clock());
    state.handle_key(Key::Select);
    state.handle_key(Key::Select);

    let mut at_top = lcd();
    render(&state, &mut at_top).unwrap();

    state.handle_key(Key::Down);
    let mut moved = lcd();
    render(&state, &mut moved).unwrap();

    assert_ne!(at_top.snapshot(), moved.snapshot());
}

#[test]
fn lock_hint_blinks_with_the_seconds() {
    let mut state = PhoneState::new(sample_clock());

    state.set_clock(ClockValue {
        time: TimeOfDay::new(12, 30, 0),
        date: CalendarDate::new(7, 8, 2026),
    });
    let mut even = lcd();
    render(&state, &mut even).unwrap();

    state.set_clock(ClockValue {
        time: TimeOfDay::new(12, 30, 1),
        date: CalendarDate::new(7, 8, 2026),
    });
    let mut odd = lcd();
    render(&state, &mut odd).unwrap();

    // The hint is visible on even seconds only.
    assert!(even.ink_count() > odd.ink_count());
}

#[test]
fn dialer_buffer_appears_on_screen() {
    let mut state = state_on_menu_entry(3);
    let mut empty = lcd();
    render(&state, &mut empty).unwrap();

    state.handle_key(Key::Digit(1));
    state.handle_key(Key::Digit(2));
    let mut typed = lcd();
    render(&state, &mut typed).unwrap();

    assert_ne!(empty.snapshot(), typed.snapshot());
}

#[test]
fn calculator_error_marker_renders() {
    let mut state = state_on_menu_entry(4);
    let mut fresh = lcd();
    render(&state, &mut fresh).unwrap();

    state.handle_key(Key::Divide);
    state.handle_key(Key::Digit(0));
    state.handle_key(Key::Equals);
    assert_eq!(state.calc(), ui::state::EVAL_ERROR_LABEL);

    let mut errored = lcd();
    render(&state, &mut errored).unwrap();
    assert_ne!(fresh.snapshot(), errored.snapshot());
}

#[test]
fn clock_value_changes_home_screen() {
    let mut state = PhoneState::new(sample_clock());
    state.handle_key(Key::Select); // → Home

    let mut noon = lcd();
    render(&state, &mut noon).unwrap();

    state.set_clock(ClockValue {
        time: TimeOfDay::new(17, 45, 0),
        date: CalendarDate::new(7, 8, 2026),
    });
    let mut evening = lcd();
    render(&state, &mut evening).unwrap();

    assert_ne!(noon.snapshot(), evening.snapshot());
}
