//! Colors of the simulated device, as 0xAARRGGBB pixels.
//!
//! The panel itself is 1-bit; the classic look comes from presenting ink on
//! a green backlight with a faint scanline every few rows.

use embedded_graphics::pixelcolor::Rgb888;

/// Ink — the dark green of lit LCD segments.
pub const INK: u32 = 0xFF0F_380F;
/// Backlight — the pale green of the idle panel.
pub const BACKLIGHT: u32 = 0xFF9F_BC0F;

/// Phone body.
pub const BEZEL: u32 = 0xFF33_4155;
/// LCD surround.
pub const LCD_BORDER: u32 = 0xFF1E_293B;
/// Regular key face.
pub const KEY_FACE: u32 = 0xFF47_5569;
/// The larger OK key face.
pub const KEY_FACE_OK: u32 = 0xFF64_748B;
/// Key cap glyphs and the brand line.
pub const KEY_TEXT: u32 = 0xFFFF_FFFF;
/// Green call key.
pub const KEY_CALL: u32 = 0xFF16_A34A;
/// Red hang-up key.
pub const KEY_HANGUP: u32 = 0xFFDC_2626;

/// Every fourth row is dimmed by this much to suggest the scanline texture.
const SCANLINE_DEPTH: u8 = 13;

/// Map one framebuffer pixel to its presented color, scanline applied.
#[must_use]
pub fn lcd_rgba(ink: bool, y: u32) -> u32 {
    let base = if ink { INK } else { BACKLIGHT };
    if y % 4 == 3 {
        darken(base, SCANLINE_DEPTH)
    } else {
        base
    }
}

/// Darken a pixel by the given amount per channel, saturating at black.
#[must_use]
pub fn darken(pixel: u32, amount: u8) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    let r = (((pixel >> 16) & 0xFF) as u8).saturating_sub(amount);
    #[allow(clippy::cast_possible_truncation)]
    let g = (((pixel >> 8) & 0xFF) as u8).saturating_sub(amount);
    #[allow(clippy::cast_possible_truncation)]
    let b = ((pixel & 0xFF) as u8).saturating_sub(amount);

    0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// An 0xAARRGGBB constant as an embedded-graphics color, for bezel drawing.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn rgb(pixel: u32) -> Rgb888 {
    Rgb888::new(
        ((pixel >> 16) & 0xFF) as u8,
        ((pixel >> 8) & 0xFF) as u8,
        (pixel & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::{darken, lcd_rgba, rgb, BACKLIGHT, INK};
    use embedded_graphics::prelude::*;

    #[test]
    fn test_ink_and_backlight() {
        assert_eq!(lcd_rgba(true, 0), INK);
        assert_eq!(lcd_rgba(false, 0), BACKLIGHT);
    }

    #[test]
    fn test_scanline_rows_are_darker() {
        assert_ne!(lcd_rgba(false, 3), BACKLIGHT);
        assert_eq!(lcd_rgba(false, 4), BACKLIGHT);
        assert_ne!(lcd_rgba(true, 7), INK);
    }

    #[test]
    fn test_darken_saturates() {
        assert_eq!(darken(0xFF00_0000, 50), 0xFF00_0000);
        assert_eq!(darken(0xFFFF_FFFF, 0xFF), 0xFF00_0000);
    }

    #[test]
    fn test_rgb_roundtrip() {
        let c = rgb(0xFF9F_BC0F);
        assert_eq!((c.r(), c.g(), c.b()), (0x9F, 0xBC, 0x0F));
    }
}
