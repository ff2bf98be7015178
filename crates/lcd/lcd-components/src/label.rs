//! Label component for panel text
//!
//! The panel shows Cyrillic product strings, so all three sizes use the
//! `iso_8859_5` mono fonts rather than the ASCII set.

// Rendering code casts panel dimensions (u32 from embedded-graphics) to i32
// for coordinate arithmetic. The panel is 128×160; nothing here can overflow.
#![allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)]

use embedded_graphics::{
    mono_font::{
        iso_8859_5::{FONT_10X20, FONT_6X10, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};

/// Text size variants
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10 font — captions, hints, list rows
    Small,
    /// 9x15 font — buffers (dialer, calculator)
    Normal,
    /// 10x20 font — the big clock digits
    Big,
}

impl TextSize {
    /// Line height in pixels
    pub fn line_height(&self) -> u32 {
        match self {
            TextSize::Small => 10,
            TextSize::Normal => 15,
            TextSize::Big => 20,
        }
    }

    /// Glyph advance in pixels
    pub fn char_width(&self) -> u32 {
        match self {
            TextSize::Small => 6,
            TextSize::Normal => 9,
            TextSize::Big => 10,
        }
    }

    fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Normal => &FONT_9X15,
            TextSize::Big => &FONT_10X20,
        }
    }
}

/// A single line of text
pub struct Label<'a> {
    text: &'a str,
    color: BinaryColor,
    size: TextSize,
}

impl<'a> Label<'a> {
    /// Create a new label with the given text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: BinaryColor::On,
            size: TextSize::Small,
        }
    }

    /// Set text color (`On` = ink)
    pub fn color(mut self, color: BinaryColor) -> Self {
        self.color = color;
        self
    }

    /// Set text size
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Rendered width in pixels. Counts characters, not bytes — the labels
    /// are Cyrillic.
    pub fn width(&self) -> u32 {
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.size.char_width())
    }

    /// Render at `position` = top-left of the line box.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let style = MonoTextStyle::new(self.size.font(), self.color);
        let baseline = position + Point::new(0, self.size.font().baseline as i32);
        Text::new(self.text, baseline, style).draw(display)?;
        Ok(())
    }

    /// Render horizontally centered in a panel `panel_width` wide, top at `y`.
    pub fn render_centered<D>(&self, display: &mut D, panel_width: u32, y: i32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let centered = (i64::from(panel_width) - i64::from(self.width())) / 2;
        let x = i32::try_from(centered.max(0)).unwrap_or(0);
        self.render(display, Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::{Label, TextSize};

    #[test]
    fn test_width_counts_chars_not_bytes() {
        // "Меню" is 4 characters, 8 bytes.
        let label = Label::new("Меню").size(TextSize::Small);
        assert_eq!(label.width(), 4 * 6);
    }

    #[test]
    fn test_size_metrics() {
        assert_eq!(TextSize::Small.line_height(), 10);
        assert_eq!(TextSize::Normal.char_width(), 9);
        assert_eq!(TextSize::Big.line_height(), 20);
    }

    #[test]
    fn test_empty_label_width() {
        assert_eq!(Label::new("").width(), 0);
    }
}
