//! Abstraction layer for the bricksim phone simulator
//!
//! This crate provides the trait seams between the pure behavioral model
//! (`ui`) and whatever drives it — today the desktop emulator, in tests a
//! scripted queue.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (simulator crate)
//!         ↓
//! Feature Layers (ui, phone-ui, lcd-components)
//!         ↓
//! Platform (this crate - trait abstractions)
//!         ↓
//! Host Layer (lcd-emulator: winit window, beep codec)
//! ```
//!
//! # Abstractions
//!
//! - [`InputDevice`] - Keypad input (mouse clicks on the bezel, mapped keys)
//! - [`AudioCodec`] - Audio output for the key-click tone
//! - [`tone`] - Key-click tone description and sample math

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(async_fn_in_trait)] // single-threaded event loop, Send bounds not needed

pub mod audio;
pub mod input;
pub mod tone;

pub use audio::{AudioCodec, AudioConfig};
pub use input::{InputDevice, InputEvent, Key};
pub use tone::{ToneSpec, KEY_CLICK};
