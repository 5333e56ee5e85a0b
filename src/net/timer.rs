//! One-shot matchmaking deadline
//!
//! Fires a single [`NetEvent::MatchTimeout`] when the deadline passes,
//! unless a match was confirmed first. Confirming wakes the timer thread
//! immediately so it exits without firing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{after, bounded, select, Sender};
use tracing::{debug, info};

use super::link::NetEvent;

pub struct MatchTimer {
    matched: Arc<AtomicBool>,
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MatchTimer {
    /// Arm the timer. `events` receives at most one `MatchTimeout`.
    pub fn start(deadline: Duration, events: Sender<NetEvent>) -> Self {
        let matched = Arc::new(AtomicBool::new(false));
        let (cancel_tx, cancel_rx) = bounded::<()>(1);

        let flag = Arc::clone(&matched);
        let handle = thread::Builder::new()
            .name("gomoku-match-timer".into())
            .spawn(move || {
                if flag.load(Ordering::Acquire) {
                    return;
                }
                select! {
                    recv(cancel_rx) -> _ => debug!("match timer cancelled"),
                    recv(after(deadline)) -> _ => {
                        if !flag.load(Ordering::Acquire) {
                            info!(?deadline, "matchmaking deadline passed");
                            let _ = events.send(NetEvent::MatchTimeout);
                        }
                    }
                }
            })
            .ok();

        Self {
            matched,
            cancel: Some(cancel_tx),
            handle,
        }
    }

    /// Mark the match as confirmed and stop the timer without firing
    pub fn confirm(&mut self) {
        self.matched.store(true, Ordering::Release);
        self.stop();
    }

    pub fn is_matched(&self) -> bool {
        self.matched.load(Ordering::Acquire)
    }

    fn stop(&mut self) {
        // Dropping the sender disconnects the cancel channel and wakes the select
        self.cancel.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MatchTimer {
    fn drop(&mut self) {
        self.matched.store(true, Ordering::Release);
        self.stop();
    }
}
