//! A cancellation timer for the Vigenère fallback, the only search in the
//! program whose running time grows combinatorially.

use std::sync::atomic::{AtomicBool, Ordering::Relaxed};
use std::sync::Arc;
use std::thread::{self, sleep};
use std::time::Duration;

use crossbeam::channel::{bounded, Receiver};
use log::{debug, warn};

/// Start the timer with duration in seconds.
/// When it runs out it raises `stop` and sends on the returned channel.
/// If `stop` is raised by someone else first, the timer exits quietly
/// within a second without sending.
pub fn start(duration: u32, stop: Arc<AtomicBool>) -> Receiver<()> {
    let (sender, recv) = bounded(1);
    thread::spawn(move || {
        let mut time_spent = 0;

        while time_spent < duration {
            if stop.load(Relaxed) {
                debug!("Analysis finished before the timer ran out");
                return;
            }
            sleep(Duration::from_secs(1));
            time_spent += 1;
        }

        warn!(
            "Timed out after {} seconds, Vigenère results may be incomplete",
            duration
        );
        stop.store(true, Relaxed);
        // the receiver may already be gone if the analysis finished meanwhile
        sender.send(()).ok();
    });

    recv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_fires_immediately() {
        let stop = Arc::new(AtomicBool::new(false));
        let recv = start(0, stop.clone());
        assert!(recv.recv().is_ok());
        assert!(stop.load(Relaxed));
    }

    #[test]
    fn raised_stop_silences_the_timer() {
        let stop = Arc::new(AtomicBool::new(true));
        let recv = start(5, stop);
        // sender is dropped without sending
        assert!(recv.recv().is_err());
    }
}
