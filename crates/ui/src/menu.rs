//! The main menu table — fixed, ordered, never mutated.

use crate::screen::Screen;

/// Icon identity for a menu entry. The components crate owns the pixels;
/// the model only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    /// Person silhouette (contacts)
    Contacts,
    /// Gamepad (games)
    Games,
    /// Envelope (messages)
    Messages,
    /// Handset (dialer)
    Dialer,
    /// Digit grid (calculator)
    Calculator,
    /// Clock face (alarm)
    Alarm,
    /// Gear (settings)
    Settings,
}

/// One navigable item in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// Screen this entry opens.
    pub target: Screen,
    /// Display label.
    pub label: &'static str,
    /// Display icon.
    pub icon: IconId,
}

/// The main menu, in product order. Defined once, never mutated.
pub const MENU: [MenuEntry; 7] = [
    MenuEntry {
        target: Screen::Contacts,
        label: "Контакты",
        icon: IconId::Contacts,
    },
    MenuEntry {
        target: Screen::Snake,
        label: "Игры",
        icon: IconId::Games,
    },
    MenuEntry {
        target: Screen::Sms,
        label: "Сообщения",
        icon: IconId::Messages,
    },
    MenuEntry {
        target: Screen::Dialer,
        label: "Набор",
        icon: IconId::Dialer,
    },
    MenuEntry {
        target: Screen::Calculator,
        label: "Калькулятор",
        icon: IconId::Calculator,
    },
    MenuEntry {
        target: Screen::Alarm,
        label: "Будильник",
        icon: IconId::Alarm,
    },
    MenuEntry {
        target: Screen::Settings,
        label: "Настройки",
        icon: IconId::Settings,
    },
];

/// Index of the last menu entry (wrap target for Up at the top).
pub const LAST: usize = MENU.len() - 1;
