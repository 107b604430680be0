//! Delayed UI messages on the background runtime.
//!
//! A scheduled message is delivered over the UI channel once its delay has
//! passed. The returned [`ScheduledTask`] aborts delivery when dropped, so a
//! task owned by the application dies with it.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Sends messages to the UI after a delay.
#[derive(Debug, Clone)]
pub struct Scheduler<M> {
    handle: Handle,
    tx: mpsc::UnboundedSender<M>,
}

/// Handle to a pending delayed message.
#[derive(Debug)]
pub struct ScheduledTask {
    join: JoinHandle<()>,
}

impl<M: Send + 'static> Scheduler<M> {
    pub fn new(handle: Handle, tx: mpsc::UnboundedSender<M>) -> Self {
        Self { handle, tx }
    }

    /// Deliver `message` after `delay`.
    pub fn schedule(&self, delay: Duration, message: M) -> ScheduledTask {
        let tx = self.tx.clone();
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI has shut down.
            let _ = tx.send(message);
        });
        ScheduledTask { join }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.join.abort();
    }
}
