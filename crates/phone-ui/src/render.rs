//! Screen rendering — one function per screen, all pure over the state.
//!
//! Layout coordinates are fixed for the 128×160 panel; every screen is a
//! static arrangement. All user-visible strings of the non-data screens live
//! here.

// Panel coordinates are small; casts and arithmetic cannot overflow i32.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects
)]

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};
use lcd_components::prelude::*;
use ui::menu::{self, IconId};
use ui::screen::Screen;
use ui::state::PhoneState;
use ui::contacts::CONTACTS;

/// Panel width in pixels.
pub const LCD_WIDTH: u32 = 128;
/// Panel height in pixels.
pub const LCD_HEIGHT: u32 = 160;

const BRAND: &str = "BRICK";
const LOCK_HINT: &str = "Нажмите ОК";
const MENU_HINT: &str = "Меню";
const SNAKE_CAPTION: &str = "SNAKE";
const SNAKE_HINT: &str = "Нажмите OK для старта";
const SMS_PROMPT: &str = "Новое сообщение:";
const EMPTY_BUFFER: &str = "_";
const ALARM_TIME: &str = "07:00";
const ALARM_STATE: &str = "Выключен";
const SETTINGS_LINES: [&str; 3] = ["Звук: Вкл", "Подсветка: 15 сек", "Язык: Русский"];

/// Draw the current screen. Clears the panel first; mutates nothing but the
/// target, so identical state renders identical pixels.
///
/// # Errors
///
/// Returns `D::Error` if any drawing operation fails.
pub fn render<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    display.clear(BinaryColor::Off)?;
    match state.screen() {
        Screen::Lock => lock_screen(state, display),
        Screen::Home => home_screen(state, display),
        Screen::Menu => menu_screen(state, display),
        Screen::Contacts => contacts_screen(display),
        Screen::Snake => snake_screen(display),
        Screen::Calculator => calculator_screen(state, display),
        Screen::Alarm => alarm_screen(display),
        Screen::Settings => settings_screen(display),
        Screen::Dialer => dialer_screen(state, display),
        Screen::Sms => sms_screen(state, display),
    }
}

fn lock_screen<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let clock = state.clock();
    Label::new(&clock.time.format_hhmm())
        .size(TextSize::Big)
        .render_centered(display, LCD_WIDTH, 48)?;
    Label::new(&clock.date.format_short())
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 76)?;
    // The hint pulses; blink phase comes from the clock so the render stays
    // a pure function of state.
    if clock.time.second % 2 == 0 {
        Label::new(LOCK_HINT)
            .size(TextSize::Small)
            .render_centered(display, LCD_WIDTH, 116)?;
    }
    Ok(())
}

fn home_screen<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let clock = state.clock();
    Label::new(BRAND)
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 6)?;
    Label::new(&clock.time.format_hhmm())
        .size(TextSize::Big)
        .render_centered(display, LCD_WIDTH, 56)?;
    Label::new(&clock.date.format_numeric())
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 82)?;
    Label::new(MENU_HINT)
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 146)?;
    Ok(())
}

fn menu_screen<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    TitleBar::new("МЕНЮ").render(display, LCD_WIDTH)?;

    let mut rows: [MenuRow; 7] = [(IconKind::Contacts, ""); 7];
    for (row, entry) in rows.iter_mut().zip(menu::MENU.iter()) {
        *row = (icon_kind(entry.icon), entry.label);
    }
    MenuList::new(&rows, state.selected()).render(
        display,
        Point::new(0, TITLE_BAR_HEIGHT as i32 + 2),
        LCD_WIDTH,
    )
}

fn contacts_screen<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    TitleBar::new("КОНТАКТЫ").render(display, LCD_WIDTH)?;
    for (index, contact) in CONTACTS.iter().enumerate() {
        let top = TITLE_BAR_HEIGHT as i32 + 4 + index as i32 * 28;
        Label::new(contact.name)
            .size(TextSize::Small)
            .render(display, Point::new(4, top))?;
        Label::new(contact.number)
            .size(TextSize::Small)
            .render(display, Point::new(4, top + 11))?;
        let rule_y = top + 24;
        Line::new(Point::new(0, rule_y), Point::new(LCD_WIDTH as i32 - 1, rule_y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)?;
    }
    Ok(())
}

fn snake_screen<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Label::new(SNAKE_CAPTION)
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 18)?;

    let field = 64_u32;
    let field_origin = Point::new((LCD_WIDTH as i32 - field as i32) / 2, 36);
    Rectangle::new(field_origin, Size::new(field, field))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
        .draw(display)?;

    Icon::new(IconKind::Snake, 16).render(
        display,
        field_origin + Point::new((field as i32 - 16) / 2, (field as i32 - 16) / 2),
    )?;

    Label::new(SNAKE_HINT)
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 116)
}

fn dialer_screen<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    TitleBar::new("НАБОР НОМЕРА").render(display, LCD_WIDTH)?;
    buffer_line(display, state.dialer(), 72)
}

fn calculator_screen<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    TitleBar::new("КАЛЬКУЛЯТОР").render(display, LCD_WIDTH)?;
    buffer_line(display, state.calc(), 72)
}

fn sms_screen<D>(state: &PhoneState, display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    TitleBar::new("СООБЩЕНИЯ").render(display, LCD_WIDTH)?;
    Label::new(SMS_PROMPT)
        .size(TextSize::Small)
        .render(display, Point::new(4, TITLE_BAR_HEIGHT as i32 + 8))?;
    let draft = if state.sms().is_empty() {
        EMPTY_BUFFER
    } else {
        state.sms()
    };
    Label::new(draft)
        .size(TextSize::Small)
        .render(display, Point::new(4, TITLE_BAR_HEIGHT as i32 + 26))
}

fn alarm_screen<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Icon::new(IconKind::Alarm, 12).render(display, Point::new((LCD_WIDTH as i32 - 12) / 2, 22))?;
    Label::new("БУДИЛЬНИК")
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 40)?;
    Label::new(ALARM_TIME)
        .size(TextSize::Big)
        .render_centered(display, LCD_WIDTH, 64)?;
    Label::new(ALARM_STATE)
        .size(TextSize::Small)
        .render_centered(display, LCD_WIDTH, 96)
}

fn settings_screen<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    TitleBar::new("НАСТРОЙКИ").render(display, LCD_WIDTH)?;
    for (index, line) in SETTINGS_LINES.iter().enumerate() {
        Label::new(line).size(TextSize::Small).render(
            display,
            Point::new(4, TITLE_BAR_HEIGHT as i32 + 8 + index as i32 * 16),
        )?;
    }
    Ok(())
}

/// A buffer line centered on the panel; empty buffers show the `_`
/// placeholder, overlong ones keep their tail visible.
fn buffer_line<D>(display: &mut D, text: &str, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let shown = if text.is_empty() { EMPTY_BUFFER } else { text };
    let label = Label::new(shown).size(TextSize::Normal);
    let width = label.width() as i32;
    let x = if width > LCD_WIDTH as i32 {
        LCD_WIDTH as i32 - width
    } else {
        (LCD_WIDTH as i32 - width) / 2
    };
    label.render(display, Point::new(x, y))
}

fn icon_kind(id: IconId) -> IconKind {
    match id {
        IconId::Contacts => IconKind::Contacts,
        IconId::Games => IconKind::Games,
        IconId::Messages => IconKind::Messages,
        IconId::Dialer => IconKind::Dialer,
        IconId::Calculator => IconKind::Calculator,
        IconId::Alarm => IconKind::Alarm,
        IconId::Settings => IconKind::Settings,
    }
}
