//! Title bar — centered caption with an underline
//!
//! Every list screen on the phone opens with one of these: КОНТАКТЫ, МЕНЮ,
//! НАБОР НОМЕРА and so on.

// Coordinate arithmetic over a 128×160 panel cannot overflow i32.
#![allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)]

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};

use crate::label::{Label, TextSize};

/// Total height of the bar, underline included.
pub const TITLE_BAR_HEIGHT: u32 = 14;

/// Screen title with a full-width rule under it
pub struct TitleBar {
    caption: &'static str,
}

impl TitleBar {
    /// Create a title bar with the given caption
    pub fn new(caption: &'static str) -> Self {
        Self { caption }
    }

    /// Render at the top of a panel `panel_width` wide.
    pub fn render<D>(&self, display: &mut D, panel_width: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Label::new(self.caption)
            .size(TextSize::Small)
            .render_centered(display, panel_width, 1)?;

        let y = TITLE_BAR_HEIGHT as i32 - 2;
        #[allow(clippy::cast_possible_wrap)]
        Line::new(Point::new(0, y), Point::new(panel_width as i32 - 1, y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TitleBar, TITLE_BAR_HEIGHT};

    #[test]
    fn test_bar_height_leaves_room_for_small_font() {
        // Small font line height is 10; the rule sits below it.
        assert!(TITLE_BAR_HEIGHT >= 12);
    }

    #[test]
    fn test_construction() {
        let _ = TitleBar::new("МЕНЮ");
    }
}
