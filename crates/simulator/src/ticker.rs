//! The 1 Hz clock ticker.
//!
//! A spawned task sends a unit message every period. The task handle lives
//! in an abort-on-drop guard: when the simulator loop exits, the guard drops
//! and the timer is cancelled on every exit path — no tick can arrive after.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owns the ticker task; dropping it cancels the timer.
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start a ticker firing every `period`.
pub fn spawn(period: Duration) -> (TickerGuard, mpsc::Receiver<()>) {
    let (tx, rx) = mpsc::channel(4);
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval yields immediately on the first tick; swallow it so the
        // first message lands one full period in.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(()).await.is_err() {
                // Receiver gone — the simulator loop has exited.
                break;
            }
        }
    });
    (TickerGuard { handle }, rx)
}

#[cfg(test)]
mod tests {
    use super::spawn;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_ticker_ticks() {
        let (_guard, mut ticks) = spawn(Duration::from_secs(1));
        assert!(ticks.recv().await.is_some());
        assert!(ticks.recv().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticker() {
        let (guard, mut ticks) = spawn(Duration::from_secs(1));
        assert!(ticks.recv().await.is_some());
        drop(guard);
        // The aborted task drops its sender; the channel closes with no
        // further ticks.
        assert!(ticks.recv().await.is_none());
    }
}
