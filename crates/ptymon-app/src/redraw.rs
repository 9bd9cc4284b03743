//! Coalescing redraw trigger
//!
//! A single-slot channel: while one redraw request is pending, further
//! requests are dropped. Any number of producers can call
//! [`RedrawSignal::request`] without the queue growing.

use tokio::sync::mpsc;

/// Producer side; cheap to clone
#[derive(Debug, Clone)]
pub struct RedrawSignal {
    tx: mpsc::Sender<()>,
}

/// Consumer side, owned by the render loop
#[derive(Debug)]
pub struct RedrawReceiver {
    rx: mpsc::Receiver<()>,
}

/// Create a connected signal/receiver pair
pub fn redraw_channel() -> (RedrawSignal, RedrawReceiver) {
    let (tx, rx) = mpsc::channel(1);
    (RedrawSignal { tx }, RedrawReceiver { rx })
}

impl RedrawSignal {
    /// Ask for a redraw. A no-op if one is already pending or the render
    /// loop has gone away.
    pub fn request(&self) {
        let _ = self.tx.try_send(());
    }
}

impl RedrawReceiver {
    /// Consume a pending request without blocking
    pub fn take_pending(&mut self) -> bool {
        let mut pending = false;
        while self.rx.try_recv().is_ok() {
            pending = true;
        }
        pending
    }
}
