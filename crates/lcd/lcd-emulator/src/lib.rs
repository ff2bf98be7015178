//! Phone LCD Emulator
//!
//! Desktop emulator for the simulated phone: a 1-bit framebuffer presented
//! through the classic green-LCD palette inside a drawn phone bezel with a
//! clickable keypad.
//!
//! - Window management (winit + softbuffer)
//! - Framebuffer (1-bit, implements `DrawTarget<BinaryColor>`)
//! - Keypad bezel with mouse hit-testing and a keyboard mapping
//! - Fire-and-forget beep codec (800 Hz key click)
//! - Headless mode for CI
//!
//! # Example
//!
//! ```no_run
//! use lcd_emulator::{Emulator, EmulatorConfig};
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{Rectangle, PrimitiveStyle};
//! use embedded_graphics::pixelcolor::BinaryColor;
//!
//! let mut emulator = Emulator::new(128, 160);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut emulator)
//!     .unwrap();
//! ```

pub mod codec;
pub mod config;
mod framebuffer;
pub mod input;
pub mod keypad;
pub mod palette;

#[cfg(not(feature = "headless"))]
mod window;

pub use codec::BeepCodec;
pub use config::EmulatorConfig;
pub use framebuffer::Framebuffer;
pub use input::EmulatorInput;
pub use keypad::{FrameCanvas, Keypad, FRAME_HEIGHT, FRAME_WIDTH, LCD_ORIGIN};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use tracing::info;

/// Errors surfaced by the desktop presentation layer.
#[derive(Debug)]
pub enum EmulatorError {
    /// The host refused to create a window (no display, etc.).
    WindowCreate(String),
    /// The softbuffer surface failed.
    Surface(String),
    /// Screenshot export failed.
    Export(String),
}

impl core::fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EmulatorError::WindowCreate(e) => write!(f, "window creation failed: {e}"),
            EmulatorError::Surface(e) => write!(f, "surface error: {e}"),
            EmulatorError::Export(e) => write!(f, "screenshot export failed: {e}"),
        }
    }
}

impl std::error::Error for EmulatorError {}

/// The phone display emulator.
///
/// Always usable headless: draw through the `DrawTarget` impl and inspect or
/// export the composed frame. With a window open, [`Emulator::present`]
/// pushes the frame to the screen and [`Emulator::pump`] feeds the input
/// queue.
pub struct Emulator {
    framebuffer: Framebuffer,
    // In headless builds the keypad only serves bezel construction in new().
    #[cfg_attr(feature = "headless", allow(dead_code))]
    keypad: Keypad,
    bezel: FrameCanvas,
    frames_presented: u64,
    #[cfg(not(feature = "headless"))]
    window: Option<window::Window>,
    #[cfg(not(feature = "headless"))]
    input: Option<EmulatorInput>,
}

impl Emulator {
    /// Create a headless emulator for a `width` × `height` panel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let keypad = Keypad::new();
        let mut bezel = FrameCanvas::new(FRAME_WIDTH, FRAME_HEIGHT, palette::BEZEL);
        keypad.draw_bezel(&mut bezel);
        Self {
            framebuffer: Framebuffer::new(width, height),
            keypad,
            bezel,
            frames_presented: 0,
            #[cfg(not(feature = "headless"))]
            window: None,
            #[cfg(not(feature = "headless"))]
            input: None,
        }
    }

    /// Direct access to the framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Frames pushed to the window so far.
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Compose the full phone frame: bezel plus the palette-mapped LCD.
    /// Returns row-major 0xAARRGGBB pixels, [`FRAME_WIDTH`] × [`FRAME_HEIGHT`].
    #[must_use]
    pub fn compose_frame(&self) -> Vec<u32> {
        let mut frame = self.bezel.clone();
        let (lx, ly) = LCD_ORIGIN;
        for y in 0..self.framebuffer.height() {
            for x in 0..self.framebuffer.width() {
                let ink = self.framebuffer.get_pixel(x, y).unwrap_or(false);
                frame.set(
                    lx.saturating_add(x),
                    ly.saturating_add(y),
                    palette::lcd_rgba(ink, y),
                );
            }
        }
        frame.pixels().to_vec()
    }

    /// Export the composed frame as a PNG.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::Export`] when encoding or writing fails.
    pub fn export_png(&self, path: &std::path::Path) -> Result<(), EmulatorError> {
        let frame = self.compose_frame();
        let mut img = image::RgbaImage::new(FRAME_WIDTH, FRAME_HEIGHT);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            // Bounds hold by construction: the image has the frame's exact size.
            #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
            let argb = frame
                .get((y * FRAME_WIDTH + x) as usize)
                .copied()
                .unwrap_or(0);
            #[allow(clippy::cast_possible_truncation)]
            let rgba = [
                ((argb >> 16) & 0xFF) as u8,
                ((argb >> 8) & 0xFF) as u8,
                (argb & 0xFF) as u8,
                0xFF,
            ];
            *pixel = image::Rgba(rgba);
        }
        img.save(path)
            .map_err(|e| EmulatorError::Export(e.to_string()))?;
        info!(path = %path.display(), "screenshot saved");
        Ok(())
    }

    /// Open the phone window.
    ///
    /// # Errors
    ///
    /// Propagates [`EmulatorError`] from window/surface creation.
    #[cfg(not(feature = "headless"))]
    pub fn open_window(&mut self, config: EmulatorConfig) -> Result<(), EmulatorError> {
        let (window, input) =
            window::Window::new(FRAME_WIDTH, FRAME_HEIGHT, &config, self.keypad.clone())?;
        self.window = Some(window);
        self.input = Some(input);
        info!(scale = config.scale, "emulator window open");
        Ok(())
    }

    /// Take the input consumer. `None` before [`Emulator::open_window`] or
    /// if already taken.
    #[cfg(not(feature = "headless"))]
    pub fn input_receiver(&mut self) -> Option<EmulatorInput> {
        self.input.take()
    }

    /// Process pending window events. Returns `false` when the window was
    /// closed (or never opened).
    #[cfg(not(feature = "headless"))]
    pub fn pump(&mut self) -> bool {
        self.window.as_mut().is_some_and(window::Window::pump)
    }

    /// True once per F12 press.
    #[cfg(not(feature = "headless"))]
    pub fn take_screenshot_request(&mut self) -> bool {
        self.window
            .as_mut()
            .is_some_and(window::Window::take_screenshot_request)
    }

    /// Compose and push the current frame to the window.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::Surface`] when presentation fails.
    #[cfg(not(feature = "headless"))]
    pub fn present(&mut self) -> Result<(), EmulatorError> {
        let frame = self.compose_frame();
        if let Some(window) = self.window.as_mut() {
            window.present(&frame)?;
            self.frames_presented = self.frames_presented.saturating_add(1);
        }
        Ok(())
    }
}

impl DrawTarget for Emulator {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.framebuffer
                    .set_pixel(point.x.unsigned_abs(), point.y.unsigned_abs(), color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Emulator {
    fn size(&self) -> Size {
        Size::new(self.framebuffer.width(), self.framebuffer.height())
    }
}
