use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver};
use log::debug;

/// Thread-backed recurring tick source.
///
/// Delivers one `Instant` per period over a channel; a single consumer
/// drains it and drives `ExerciseTimer::tick()`. Dropping the ticker
/// stops the thread and joins it, so no tick can outlive the owning
/// screen, including the navigate-away-early case.
pub struct Ticker {
    receiver: Receiver<Instant>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn every(period: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = unbounded();

        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            while !thread_stop.load(Ordering::Relaxed) {
                std::thread::sleep(period);
                if thread_stop.load(Ordering::Relaxed) {
                    break;
                }
                if sender.send(Instant::now()).is_err() {
                    break;
                }
            }
        });

        Self {
            receiver,
            stop,
            handle: Some(handle),
        }
    }

    /// Non-blocking. Returns the next pending tick, if any.
    pub fn try_tick(&self) -> Option<Instant> {
        self.receiver.try_recv().ok()
    }

    /// The underlying channel, for callers that block in a select loop.
    pub fn receiver(&self) -> &Receiver<Instant> {
        &self.receiver
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        debug!("ticker released");
    }
}
