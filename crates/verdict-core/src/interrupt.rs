// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cooperative interruption.
//
// A long-running operation polls `check_interrupt` at points of its choosing
// and stops with `Interrupted` once the flag is raised.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Interrupted;
use crate::outcome::Outcome;

/// Something whose operation can be asked to stop.
pub trait Interruptible {
    fn interruption_flag(&self) -> bool;

    fn set_interruption_flag(&self, interrupt: bool);

    /// `Interrupted` if the flag is raised, otherwise unit.
    fn check_interrupt(&self) -> Outcome<(), Interrupted> {
        if self.interruption_flag() {
            Outcome::Error(Interrupted::default())
        } else {
            Outcome::Value(())
        }
    }
}

/// Interruption flag backed by an `AtomicBool`.
#[derive(Debug, Default)]
pub struct AtomicInterruptor {
    flag: AtomicBool,
}

impl AtomicInterruptor {
    pub fn new(interrupt: bool) -> Self {
        Self {
            flag: AtomicBool::new(interrupt),
        }
    }
}

impl Interruptible for AtomicInterruptor {
    fn interruption_flag(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn set_interruption_flag(&self, interrupt: bool) {
        self.flag.store(interrupt, Ordering::Release);
    }
}

impl<T: Interruptible + ?Sized> Interruptible for Arc<T> {
    fn interruption_flag(&self) -> bool {
        (**self).interruption_flag()
    }

    fn set_interruption_flag(&self, interrupt: bool) {
        (**self).set_interruption_flag(interrupt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn clear_flag_passes() {
        let interruptor = AtomicInterruptor::default();
        assert!(interruptor.check_interrupt().is_value());
    }

    #[test]
    fn raised_flag_interrupts() {
        let interruptor = AtomicInterruptor::new(true);
        let outcome = interruptor.check_interrupt();
        assert_eq!(outcome.error().message(), "Operation has been interrupted");

        interruptor.set_interruption_flag(false);
        assert!(interruptor.check_interrupt().is_value());
    }

    #[test]
    fn flag_raised_from_another_thread_stops_the_loop() {
        let interruptor = Arc::new(AtomicInterruptor::default());
        let (started_tx, started_rx) = mpsc::channel();

        let worker = {
            let interruptor = Arc::clone(&interruptor);
            thread::spawn(move || {
                let mut pages = 0u64;
                let _ = started_tx.send(());
                loop {
                    if interruptor.check_interrupt().is_error() {
                        return pages;
                    }
                    pages += 1;
                    thread::yield_now();
                }
            })
        };

        started_rx.recv().expect("worker started");
        interruptor.set_interruption_flag(true);
        worker.join().expect("worker finished");
        assert!(interruptor.interruption_flag());
    }
}
