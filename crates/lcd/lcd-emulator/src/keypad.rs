//! The phone bezel: frame canvas, keypad layout, cap drawing, hit-testing.
//!
//! Everything outside the LCD glass lives here — the body, the brand line,
//! the navigation cluster, the 12-key grid and the two decorative call keys.
//! The same layout serves two purposes: it is drawn once into the bezel
//! canvas, and it answers mouse hit-tests with the key under the cursor.

// Bezel geometry is a fixed 160×356 layout; coordinate arithmetic cannot
// overflow i32 and the usize→i32 casts are over single-digit indices.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects
)]

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::Text,
};
use platform::Key;

use crate::palette;

/// Logical width of the whole phone frame, before upscaling.
pub const FRAME_WIDTH: u32 = 160;
/// Logical height of the whole phone frame, before upscaling.
pub const FRAME_HEIGHT: u32 = 356;
/// Where the LCD's top-left pixel sits inside the frame.
pub const LCD_ORIGIN: (u32, u32) = (16, 22);

const BRAND: &str = "BRICK";

/// What is printed on a key cap.
#[derive(Debug, Clone, Copy)]
enum Cap {
    Text(&'static str),
    ArrowUp,
    ArrowDown,
    Handset,
}

/// One key's face, position, and identity.
#[derive(Debug, Clone, Copy)]
struct KeyCap {
    key: Key,
    origin: Point,
    size: Size,
    face: u32,
    cap: Cap,
}

impl KeyCap {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, self.size)
    }
}

/// The full keypad: drawn once, hit-tested on every click.
#[derive(Debug, Clone)]
pub struct Keypad {
    caps: Vec<KeyCap>,
}

impl Keypad {
    /// Build the fixed layout.
    #[must_use]
    pub fn new() -> Self {
        let mut caps = Vec::with_capacity(19);

        // Navigation cluster.
        caps.push(KeyCap {
            key: Key::Up,
            origin: Point::new(66, 192),
            size: Size::new(28, 14),
            face: palette::KEY_FACE,
            cap: Cap::ArrowUp,
        });
        caps.push(KeyCap {
            key: Key::Back,
            origin: Point::new(20, 210),
            size: Size::new(32, 18),
            face: palette::KEY_FACE,
            cap: Cap::Text("C"),
        });
        caps.push(KeyCap {
            key: Key::Select,
            origin: Point::new(64, 208),
            size: Size::new(32, 22),
            face: palette::KEY_FACE_OK,
            cap: Cap::Text("OK"),
        });
        caps.push(KeyCap {
            key: Key::Menu,
            origin: Point::new(108, 210),
            size: Size::new(32, 18),
            face: palette::KEY_FACE,
            cap: Cap::Text("M"),
        });
        caps.push(KeyCap {
            key: Key::Down,
            origin: Point::new(66, 234),
            size: Size::new(28, 14),
            face: palette::KEY_FACE,
            cap: Cap::ArrowDown,
        });

        // Digit grid, telephone order.
        let grid: [(Key, &'static str); 12] = [
            (Key::Digit(1), "1"),
            (Key::Digit(2), "2"),
            (Key::Digit(3), "3"),
            (Key::Digit(4), "4"),
            (Key::Digit(5), "5"),
            (Key::Digit(6), "6"),
            (Key::Digit(7), "7"),
            (Key::Digit(8), "8"),
            (Key::Digit(9), "9"),
            (Key::Star, "*"),
            (Key::Digit(0), "0"),
            (Key::Hash, "#"),
        ];
        for (index, (key, label)) in grid.into_iter().enumerate() {
            let col = (index % 3) as i32;
            let row = (index / 3) as i32;
            caps.push(KeyCap {
                key,
                origin: Point::new(8 + col * 52, 254 + row * 20),
                size: Size::new(40, 16),
                face: palette::KEY_FACE,
                cap: Cap::Text(label),
            });
        }

        // Decorative call row. The keys emit events; the dispatcher ignores
        // them.
        caps.push(KeyCap {
            key: Key::HangUp,
            origin: Point::new(8, 336),
            size: Size::new(64, 14),
            face: palette::KEY_HANGUP,
            cap: Cap::Handset,
        });
        caps.push(KeyCap {
            key: Key::Call,
            origin: Point::new(88, 336),
            size: Size::new(64, 14),
            face: palette::KEY_CALL,
            cap: Cap::Handset,
        });

        Self { caps }
    }

    /// The key under `point` (logical frame coordinates), if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Key> {
        self.caps
            .iter()
            .find(|cap| cap.bounds().contains(point))
            .map(|cap| cap.key)
    }

    /// Draw the whole bezel — body, brand, LCD surround, key caps.
    pub fn draw_bezel(&self, canvas: &mut FrameCanvas) {
        canvas.fill(palette::BEZEL);

        let text = MonoTextStyle::new(&FONT_6X10, palette::rgb(palette::KEY_TEXT));
        let brand_x = (FRAME_WIDTH as i32 - BRAND.len() as i32 * 6) / 2;
        Text::new(BRAND, Point::new(brand_x, 14), text)
            .draw(canvas)
            .ok();

        // LCD surround: a dark border two pixels proud of the glass.
        let (lx, ly) = LCD_ORIGIN;
        Rectangle::new(
            Point::new(lx as i32 - 2, ly as i32 - 2),
            Size::new(132, 164),
        )
        .into_styled(PrimitiveStyle::with_stroke(
            palette::rgb(palette::LCD_BORDER),
            2,
        ))
        .draw(canvas)
        .ok();

        for cap in &self.caps {
            Self::draw_cap(canvas, cap);
        }
    }

    fn draw_cap(canvas: &mut FrameCanvas, cap: &KeyCap) {
        RoundedRectangle::with_equal_corners(cap.bounds(), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(palette::rgb(cap.face)))
            .draw(canvas)
            .ok();

        let center = cap.bounds().center();
        let glyph = MonoTextStyle::new(&FONT_6X10, palette::rgb(palette::KEY_TEXT));
        match cap.cap {
            Cap::Text(label) => {
                let x = center.x - label.len() as i32 * 6 / 2;
                // FONT_6X10 baseline sits 8 rows below the glyph top.
                Text::new(label, Point::new(x, center.y + 3), glyph)
                    .draw(canvas)
                    .ok();
            }
            Cap::ArrowUp => {
                Triangle::new(
                    center + Point::new(0, -4),
                    center + Point::new(-5, 3),
                    center + Point::new(5, 3),
                )
                .into_styled(PrimitiveStyle::with_fill(palette::rgb(palette::KEY_TEXT)))
                .draw(canvas)
                .ok();
            }
            Cap::ArrowDown => {
                Triangle::new(
                    center + Point::new(0, 4),
                    center + Point::new(-5, -3),
                    center + Point::new(5, -3),
                )
                .into_styled(PrimitiveStyle::with_fill(palette::rgb(palette::KEY_TEXT)))
                .draw(canvas)
                .ok();
            }
            Cap::Handset => {
                // A stylized handset: grip bar with two raised lugs.
                Rectangle::new(center + Point::new(-8, -1), Size::new(16, 3))
                    .into_styled(PrimitiveStyle::with_fill(palette::rgb(palette::KEY_TEXT)))
                    .draw(canvas)
                    .ok();
                for dx in [-8, 6] {
                    Rectangle::new(center + Point::new(dx, -3), Size::new(2, 3))
                        .into_styled(PrimitiveStyle::with_fill(palette::rgb(
                            palette::KEY_TEXT,
                        )))
                        .draw(canvas)
                        .ok();
                }
            }
        }
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

/// A plain 0xAARRGGBB canvas the bezel is drawn onto.
///
/// Implements `DrawTarget<Color = Rgb888>` so the bezel uses the same
/// drawing stack as the panel itself.
#[derive(Debug, Clone)]
pub struct FrameCanvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameCanvas {
    /// A canvas filled with `fill`.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: u32) -> Self {
        Self {
            pixels: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    /// Fill the whole canvas.
    pub fn fill(&mut self, pixel: u32) {
        self.pixels.fill(pixel);
    }

    /// Write one pixel. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, pixel: u32) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            if let Some(slot) = self.pixels.get_mut(idx) {
                *slot = pixel;
            }
        }
    }

    /// Read one pixel. `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    /// The raw pixel buffer, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl DrawTarget for FrameCanvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let argb = 0xFF00_0000
                | (u32::from(color.r()) << 16)
                | (u32::from(color.g()) << 8)
                | u32::from(color.b());
            self.set(point.x.unsigned_abs(), point.y.unsigned_abs(), argb);
        }
        Ok(())
    }
}

impl OriginDimensions for FrameCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameCanvas, Keypad, FRAME_HEIGHT, FRAME_WIDTH, LCD_ORIGIN};
    use crate::palette;
    use embedded_graphics::prelude::*;
    use platform::Key;

    #[test]
    fn test_hit_test_finds_digits() {
        let keypad = Keypad::new();
        // Center of the "5" key: col 1, row 1.
        assert_eq!(
            keypad.hit_test(Point::new(8 + 52 + 20, 254 + 20 + 8)),
            Some(Key::Digit(5))
        );
    }

    #[test]
    fn test_hit_test_finds_ok() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Point::new(80, 218)), Some(Key::Select));
    }

    #[test]
    fn test_hit_test_call_keys_exist() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Point::new(40, 342)), Some(Key::HangUp));
        assert_eq!(keypad.hit_test(Point::new(120, 342)), Some(Key::Call));
    }

    #[test]
    fn test_hit_test_misses_lcd() {
        let keypad = Keypad::new();
        let (lx, ly) = LCD_ORIGIN;
        assert_eq!(
            keypad.hit_test(Point::new(lx as i32 + 10, ly as i32 + 10)),
            None
        );
    }

    #[test]
    fn test_bezel_draws_key_faces() {
        let keypad = Keypad::new();
        let mut canvas = FrameCanvas::new(FRAME_WIDTH, FRAME_HEIGHT, 0);
        keypad.draw_bezel(&mut canvas);
        // The body color fills the corner; a key face shows inside the "5"
        // cap, left of its glyph.
        assert_eq!(canvas.get(0, 0), Some(palette::BEZEL));
        assert_eq!(canvas.get(65, 276), Some(palette::KEY_FACE));
    }

    #[test]
    fn test_canvas_bounds() {
        let mut canvas = FrameCanvas::new(4, 4, 0);
        canvas.set(100, 100, 0xFFFF_FFFF); // ignored
        assert_eq!(canvas.get(100, 100), None);
    }
}
