//! Channel used to move background results back onto the UI thread.
//!
//! HTTP callbacks run on whatever thread the transport picks. They hold an
//! [`Updater`], push their result through it, and the updater pokes the
//! [`Waker`] so the UI schedules another frame. The UI owns the matching
//! [`UpdateReceiver`] and drains it once per frame.

use std::fmt;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::warn;

/// Callback invoked after every update is sent (typically `request_repaint`).
#[derive(Clone)]
pub struct Waker(Arc<dyn Fn() + Send + Sync>);

impl Waker {
    pub fn new(wake: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(wake))
    }

    /// A waker that does nothing. Used in tests and headless runs.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn wake(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Waker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Waker")
    }
}

impl Default for Waker {
    fn default() -> Self {
        Self::noop()
    }
}

/// Sending half. Cheap to clone and `Send`, so it can be moved into callbacks.
#[derive(Debug)]
pub struct Updater<T> {
    send: Sender<T>,
    waker: Waker,
}

impl<T> Clone for Updater<T> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
            waker: self.waker.clone(),
        }
    }
}

impl<T> Updater<T> {
    /// Publishes `value` and wakes the receiver side.
    ///
    /// A dropped receiver means the UI is gone; the value is discarded.
    pub fn set(&self, value: T) {
        if self.send.send(value).is_err() {
            warn!("update receiver dropped, discarding update");
            return;
        }
        self.waker.wake();
    }
}

/// Receiving half, owned by the UI thread.
#[derive(Debug)]
pub struct UpdateReceiver<T> {
    recv: Receiver<T>,
}

impl<T> UpdateReceiver<T> {
    /// Takes every pending update in arrival order without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.recv.try_iter().collect()
    }
}

/// Creates a connected updater/receiver pair.
pub fn channel<T>(waker: Waker) -> (Updater<T>, UpdateReceiver<T>) {
    let (send, recv) = flume::unbounded();
    (Updater { send, waker }, UpdateReceiver { recv })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn drain_returns_updates_in_order() {
        let (updater, receiver) = channel::<u32>(Waker::noop());

        updater.set(1);
        updater.set(2);
        updater.clone().set(3);

        assert_eq!(receiver.drain(), vec![1, 2, 3]);
        assert!(receiver.drain().is_empty());
    }

    #[test]
    fn every_update_wakes() {
        let woken = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&woken);
        let (updater, _receiver) = channel::<&str>(Waker::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        updater.set("a");
        updater.set("b");

        assert_eq!(woken.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn updates_cross_threads() {
        let (updater, receiver) = channel::<String>(Waker::noop());

        std::thread::spawn(move || updater.set("from worker".to_owned()))
            .join()
            .expect("worker thread should not panic");

        assert_eq!(receiver.drain(), vec!["from worker".to_owned()]);
    }

    #[test]
    fn dropped_receiver_does_not_wake() {
        let woken = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&woken);
        let (updater, receiver) = channel::<u8>(Waker::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        drop(receiver);

        updater.set(7);

        assert_eq!(woken.load(Ordering::SeqCst), 0);
    }
}
