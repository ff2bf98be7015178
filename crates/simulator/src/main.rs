//! bricksim — an on-screen simulation of a classic candybar phone.
//!
//! Wires the pure behavioral model to the desktop emulator: one event loop
//! over the 1 Hz clock ticker and the window's input queue, with a key click
//! fired before every dispatch and a re-render after every state change.

#![allow(missing_docs)] // application crate

mod clock;
mod ticker;

use std::time::Duration;

use anyhow::Context as _;
use lcd_emulator::{BeepCodec, Emulator, EmulatorConfig};
use phone_ui::{render, LCD_HEIGHT, LCD_WIDTH};
use platform::{AudioCodec, AudioConfig, InputDevice, InputEvent};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use ui::state::PhoneState;

/// How often window events are pumped and the input queue drained.
const FRAME_PERIOD: Duration = Duration::from_millis(16);

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut emulator = Emulator::new(LCD_WIDTH, LCD_HEIGHT);
    emulator.open_window(EmulatorConfig::DEFAULT)?;
    let mut input = emulator
        .input_receiver()
        .context("input queue missing after window open")?;

    let mut codec = BeepCodec::new();
    codec.init(AudioConfig::default()).await?;

    let mut state = PhoneState::new(clock::local_clock());

    // The ticker guard must outlive the loop; dropping it on any exit path
    // cancels the timer.
    let (_ticker, mut ticks) = ticker::spawn(Duration::from_secs(1));

    let mut frame = tokio::time::interval(FRAME_PERIOD);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("bricksim started");
    render(&state, &mut emulator)?;
    emulator.present()?;

    loop {
        let mut dirty = false;

        tokio::select! {
            _ = ticks.recv() => {
                state.set_clock(clock::local_clock());
                dirty = true;
            }
            _ = frame.tick() => {
                if !emulator.pump() {
                    break;
                }
                while let Some(event) = input.poll_event() {
                    if let InputEvent::KeyPress(key) = event {
                        debug!(?key, "key press");
                        // The click precedes dispatch, unconditionally.
                        codec.key_click().await;
                        state.handle_key(key);
                        dirty = true;
                    }
                }
                if emulator.take_screenshot_request() {
                    let path = std::path::Path::new("bricksim.png");
                    if let Err(e) = emulator.export_png(path) {
                        warn!("screenshot failed: {e}");
                    }
                }
            }
        }

        if dirty {
            render(&state, &mut emulator)?;
            emulator.present()?;
        }
    }

    info!(
        frames = emulator.frames_presented(),
        beeps = codec.beeps_played(),
        "window closed, shutting down"
    );
    Ok(())
}
