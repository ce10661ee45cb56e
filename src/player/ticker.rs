//! Background tick source for the simulated clock.
//!
//! A `Ticker` is a thread that sends `Tick` every interval until it is
//! dropped. The `Scheduler` keeps at most one alive and replaces it whenever
//! the controller's `Clock` generation moves on.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use super::clock::Clock;

/// One clock tick, tagged with the generation it was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

pub struct Ticker {
    generation: u64,
    cancel: Arc<AtomicBool>,
}

impl Ticker {
    pub fn spawn(generation: u64, interval: Duration, tx: Sender<Tick>) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if flag.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        });

        tracing::trace!(generation, ?interval, "ticker armed");
        Self { generation, cancel }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // The thread may still be asleep; it exits on its next wake-up and
        // any tick already queued is rejected by the generation check.
        self.cancel.store(true, Ordering::Release);
        tracing::trace!(generation = self.generation, "ticker cancelled");
    }
}

/// Keeps the live `Ticker` in step with a `Clock`.
pub struct Scheduler {
    interval: Duration,
    tx: Sender<Tick>,
    current: Option<Ticker>,
}

impl Scheduler {
    pub fn new(interval: Duration, tx: Sender<Tick>) -> Self {
        Self {
            interval,
            tx,
            current: None,
        }
    }

    /// Cancel a stale ticker and arm a new one when the clock runs.
    pub fn sync(&mut self, clock: &Clock) {
        if !clock.is_running() {
            self.current = None;
            return;
        }
        let up_to_date = self
            .current
            .as_ref()
            .is_some_and(|t| t.generation() == clock.generation());
        if !up_to_date {
            // Drop first so the old thread is cancelled before the new one starts.
            self.current = None;
            self.current = Some(Ticker::spawn(
                clock.generation(),
                self.interval,
                self.tx.clone(),
            ));
        }
    }

    /// Generation of the armed ticker, if any.
    #[cfg(test)]
    pub fn armed_generation(&self) -> Option<u64> {
        self.current.as_ref().map(Ticker::generation)
    }

    pub fn stop(&mut self) {
        self.current = None;
    }
}
