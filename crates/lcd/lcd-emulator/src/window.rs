//! Isolated window management layer
//!
//! Based on the softbuffer pattern: https://github.com/rust-windowing/softbuffer
//! All platform-specific windowing code lives here — the rest of the crate
//! deals in framebuffers and input events.

// Pixel-copy loops index into buffers whose sizes are fixed at window
// creation; coordinate arithmetic is bounded by those dimensions.
#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window as WinitWindow, WindowAttributes, WindowId};

use embedded_graphics::prelude::Point;
use platform::{InputEvent, Key};
use tracing::debug;

use crate::config::EmulatorConfig;
use crate::input::{map_key, EmulatorInput, InputQueue};
use crate::keypad::Keypad;
use crate::EmulatorError;

/// Window state fed by the winit event pump.
struct PumpState {
    queue: InputQueue,
    keypad: Keypad,
    scale: f64,
    cursor: (f64, f64),
    mouse_key: Option<Key>,
    shift: bool,
    should_exit: bool,
    screenshot_requested: bool,
}

impl ApplicationHandler for PumpState {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window is already created before the pump loop starts.
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.should_exit = true;
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::F12 {
                        if event.state == ElementState::Pressed {
                            self.screenshot_requested = true;
                        }
                        return;
                    }
                    if let Some(key) = map_key(code, self.shift) {
                        let input = match event.state {
                            ElementState::Pressed => InputEvent::KeyPress(key),
                            ElementState::Released => InputEvent::KeyRelease(key),
                        };
                        self.queue.push(input);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let logical = Point::new(
                        (self.cursor.0 / self.scale) as i32,
                        (self.cursor.1 / self.scale) as i32,
                    );
                    if let Some(key) = self.keypad.hit_test(logical) {
                        debug!(?key, "keypad click");
                        self.queue.push(InputEvent::KeyPress(key));
                        self.mouse_key = Some(key);
                    }
                }
                ElementState::Released => {
                    if let Some(key) = self.mouse_key.take() {
                        self.queue.push(InputEvent::KeyRelease(key));
                    }
                }
            },
            WindowEvent::RedrawRequested => {
                // Redraw happens via present() calls.
            }
            _ => {}
        }
    }
}

/// Window management (isolated from application logic)
pub struct Window {
    event_loop: EventLoop<()>,
    window: Arc<WinitWindow>,
    surface: Surface<Arc<WinitWindow>, Arc<WinitWindow>>,
    state: PumpState,
    width: u32,  // Logical frame width
    height: u32, // Logical frame height
    scale: u32,
}

impl Window {
    /// Create the phone window and its input pipe.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::WindowCreate`] when the host has no usable
    /// display, and [`EmulatorError::Surface`] when the softbuffer surface
    /// cannot be set up.
    pub fn new(
        width: u32,
        height: u32,
        config: &EmulatorConfig,
        keypad: Keypad,
    ) -> Result<(Self, EmulatorInput), EmulatorError> {
        let mut event_loop =
            EventLoop::new().map_err(|e| EmulatorError::WindowCreate(e.to_string()))?;

        let scale = config.scale.max(1);
        let scaled_w = width.saturating_mul(scale);
        let scaled_h = height.saturating_mul(scale);

        let window_attributes = WindowAttributes::default()
            .with_title("bricksim")
            .with_inner_size(winit::dpi::PhysicalSize::new(scaled_w, scaled_h))
            .with_resizable(false);

        // Single-shot creator: the window must be created inside resumed().
        struct WindowCreator {
            window_attributes: Option<WindowAttributes>,
            window: Option<Arc<WinitWindow>>,
            surface: Option<Surface<Arc<WinitWindow>, Arc<WinitWindow>>>,
        }

        impl ApplicationHandler for WindowCreator {
            fn resumed(&mut self, event_loop: &ActiveEventLoop) {
                if self.window.is_some() {
                    return;
                }
                let Some(attributes) = self.window_attributes.take() else {
                    return;
                };
                match event_loop.create_window(attributes) {
                    Ok(window) => {
                        let window = Arc::new(window);
                        match Context::new(window.clone())
                            .and_then(|context| Surface::new(&context, window.clone()))
                        {
                            Ok(surface) => {
                                self.window = Some(window);
                                self.surface = Some(surface);
                            }
                            Err(e) => tracing::error!("failed to create surface: {e}"),
                        }
                    }
                    Err(e) => tracing::error!("failed to create window: {e}"),
                }
            }

            fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
        }

        let mut creator = WindowCreator {
            window_attributes: Some(window_attributes),
            window: None,
            surface: None,
        };

        // Pump once to run resumed() and create the window.
        let _ = event_loop.pump_app_events(Some(Duration::from_millis(1)), &mut creator);

        let window = creator
            .window
            .ok_or_else(|| EmulatorError::WindowCreate("no window after pump".into()))?;
        let mut surface = creator
            .surface
            .ok_or_else(|| EmulatorError::Surface("no surface after pump".into()))?;

        // Resize the surface once during initialization (never again).
        let (w, h) = (
            NonZeroU32::new(scaled_w)
                .ok_or_else(|| EmulatorError::Surface("zero-sized window".into()))?,
            NonZeroU32::new(scaled_h)
                .ok_or_else(|| EmulatorError::Surface("zero-sized window".into()))?,
        );
        surface
            .resize(w, h)
            .map_err(|e| EmulatorError::Surface(e.to_string()))?;

        let (queue, consumer) = InputQueue::new();
        let state = PumpState {
            queue,
            keypad,
            scale: f64::from(scale),
            cursor: (0.0, 0.0),
            mouse_key: None,
            shift: false,
            should_exit: false,
            screenshot_requested: false,
        };

        Ok((
            Self {
                event_loop,
                window,
                surface,
                state,
                width,
                height,
                scale,
            },
            consumer,
        ))
    }

    /// Process pending window events. Returns `false` once the user has
    /// asked to close the window.
    pub fn pump(&mut self) -> bool {
        let _ = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        !self.state.should_exit
    }

    /// True once since the last call when F12 was pressed.
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.state.screenshot_requested)
    }

    /// Present a logical frame (width × height 0xAARRGGBB pixels), upscaled
    /// to the window.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::Surface`] when the surface rejects the
    /// buffer.
    pub fn present(&mut self, frame: &[u32]) -> Result<(), EmulatorError> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| EmulatorError::Surface(e.to_string()))?;

        let scale = self.scale as usize;
        let (w, h) = (self.width as usize, self.height as usize);
        let window_w = w * scale;

        if scale == 1 {
            let len = buffer.len().min(frame.len());
            if let (Some(dst), Some(src)) = (buffer.get_mut(..len), frame.get(..len)) {
                dst.copy_from_slice(src);
            }
        } else {
            for y in 0..h {
                for x in 0..w {
                    let Some(&pixel) = frame.get(y * w + x) else {
                        continue;
                    };
                    for dy in 0..scale {
                        let row = (y * scale + dy) * window_w + x * scale;
                        for dx in 0..scale {
                            if let Some(slot) = buffer.get_mut(row + dx) {
                                *slot = pixel;
                            }
                        }
                    }
                }
            }
        }

        buffer
            .present()
            .map_err(|e| EmulatorError::Surface(e.to_string()))?;
        self.window.request_redraw();
        Ok(())
    }
}
