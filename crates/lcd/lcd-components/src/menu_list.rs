//! Menu list — icon + label rows with one row highlighted
//!
//! The selected row renders inverted: a filled bar with the icon and label
//! knocked out, the way the product highlights its menu cursor.

// Row geometry over a 128×160 panel cannot overflow i32; row indices are
// single digits.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects
)]

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::icon::{Icon, IconKind};
use crate::label::{Label, TextSize};

/// Height of one menu row in pixels.
pub const ROW_HEIGHT: u32 = 18;

/// One rendered row: which icon, what label.
pub type MenuRow = (IconKind, &'static str);

/// Vertical list of icon + label rows
pub struct MenuList<'a> {
    rows: &'a [MenuRow],
    selected: usize,
}

impl<'a> MenuList<'a> {
    /// Create a list over `rows` with `selected` highlighted.
    pub fn new(rows: &'a [MenuRow], selected: usize) -> Self {
        Self { rows, selected }
    }

    /// Pixel height of the whole list.
    pub fn height(&self) -> u32 {
        ROW_HEIGHT.saturating_mul(u32::try_from(self.rows.len()).unwrap_or(0))
    }

    /// Render with the first row's top-left at `origin`, rows `width` wide.
    pub fn render<D>(&self, display: &mut D, origin: Point, width: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        for (index, (icon, label)) in self.rows.iter().enumerate() {
            let top = origin + Point::new(0, index as i32 * ROW_HEIGHT as i32);
            let selected = index == self.selected;

            let (fg, bg) = if selected {
                (BinaryColor::Off, BinaryColor::On)
            } else {
                (BinaryColor::On, BinaryColor::Off)
            };

            if selected {
                Rectangle::new(top, Size::new(width, ROW_HEIGHT))
                    .into_styled(PrimitiveStyle::with_fill(bg))
                    .draw(display)?;
            }

            Icon::new(*icon, 10)
                .color(fg)
                .render(display, top + Point::new(4, 4))?;

            Label::new(label)
                .size(TextSize::Small)
                .color(fg)
                .render(display, top + Point::new(20, 4))?;
        }
        Ok(())
    }
}
