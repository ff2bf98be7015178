//! Headless LCD testing utilities
//!
//! A plain in-memory `DrawTarget` with assertion helpers, so render code can
//! be exercised in unit tests without a window or an emulator.
//!
//! # Quick start
//!
//! ```
//! use lcd_testing::TestLcd;
//! use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut lcd = TestLcd::new(128, 160);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut lcd)
//!     .unwrap();
//!
//! assert!(lcd.is_ink(20, 15));
//! assert_eq!(lcd.ink_count(), 40 * 20);
//! ```

#![warn(clippy::all)]
#![warn(clippy::print_stdout)]

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

/// In-memory 1-bit display for render tests.
///
/// Out-of-bounds pixels are silently clipped, matching real display-driver
/// behavior, so layout mistakes surface as assertion failures rather than
/// panics.
pub struct TestLcd {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl TestLcd {
    /// Create a cleared test display.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        // Panel-sized allocations only; width * height is small.
        #[allow(clippy::arithmetic_side_effects)]
        let size = (width * height) as usize;
        Self {
            width,
            height,
            pixels: vec![false; size],
        }
    }

    /// True when the pixel at (`x`, `y`) is ink (`BinaryColor::On`).
    /// Out-of-bounds reads are `false`.
    // Index arithmetic is bounded by the dimension check above it.
    #[allow(clippy::arithmetic_side_effects)]
    #[must_use]
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Total number of ink pixels.
    #[must_use]
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    /// Number of ink pixels inside `region`.
    #[must_use]
    pub fn region_ink_count(&self, region: Rectangle) -> usize {
        let mut count = 0_usize;
        for p in region.points() {
            if p.x >= 0 && p.y >= 0 && self.is_ink(p.x.unsigned_abs(), p.y.unsigned_abs()) {
                count = count.saturating_add(1);
            }
        }
        count
    }

    /// Copy of the pixel buffer, for before/after comparisons.
    #[must_use]
    pub fn snapshot(&self) -> Vec<bool> {
        self.pixels.clone()
    }

    /// Clear back to background.
    pub fn clear_panel(&mut self) {
        self.pixels.fill(false);
    }

    /// Assert a single pixel's state.
    ///
    /// # Panics
    ///
    /// Panics (test-style) when the pixel does not match.
    #[allow(clippy::panic)]
    pub fn assert_pixel(&self, x: u32, y: u32, ink: bool) {
        assert_eq!(
            self.is_ink(x, y),
            ink,
            "pixel ({x}, {y}) expected ink={ink}"
        );
    }
}

impl DrawTarget for TestLcd {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x.unsigned_abs(), point.y.unsigned_abs());
            if x >= self.width || y >= self.height {
                continue;
            }
            #[allow(clippy::arithmetic_side_effects)]
            let idx = (y * self.width + x) as usize;
            if let Some(slot) = self.pixels.get_mut(idx) {
                *slot = color.is_on();
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestLcd {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::TestLcd;
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn test_starts_clear() {
        let lcd = TestLcd::new(16, 16);
        assert_eq!(lcd.ink_count(), 0);
    }

    #[test]
    fn test_draw_and_count() {
        let mut lcd = TestLcd::new(16, 16);
        Rectangle::new(Point::new(2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut lcd)
            .unwrap();
        assert_eq!(lcd.ink_count(), 16);
        assert!(lcd.is_ink(3, 3));
        assert!(!lcd.is_ink(10, 10));
    }

    #[test]
    fn test_out_of_bounds_clipped() {
        let mut lcd = TestLcd::new(8, 8);
        Rectangle::new(Point::new(-4, -4), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut lcd)
            .unwrap();
        // Every on-panel pixel painted, nothing panicked.
        assert_eq!(lcd.ink_count(), 64);
    }

    #[test]
    fn test_region_count() {
        let mut lcd = TestLcd::new(16, 16);
        Rectangle::new(Point::new(0, 0), Size::new(8, 1))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut lcd)
            .unwrap();
        let top = Rectangle::new(Point::zero(), Size::new(16, 2));
        let bottom = Rectangle::new(Point::new(0, 8), Size::new(16, 8));
        assert_eq!(lcd.region_ink_count(top), 8);
        assert_eq!(lcd.region_ink_count(bottom), 0);
    }

    #[test]
    fn test_snapshot_captures_state() {
        let mut lcd = TestLcd::new(8, 8);
        let before = lcd.snapshot();
        Rectangle::new(Point::zero(), Size::new(1, 1))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut lcd)
            .unwrap();
        assert_ne!(before, lcd.snapshot());
        lcd.clear_panel();
        assert_eq!(before, lcd.snapshot());
    }

    #[test]
    fn test_off_draw_erases() {
        let mut lcd = TestLcd::new(8, 8);
        Rectangle::new(Point::zero(), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut lcd)
            .unwrap();
        Rectangle::new(Point::zero(), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut lcd)
            .unwrap();
        assert_eq!(lcd.ink_count(), 0);
    }
}
