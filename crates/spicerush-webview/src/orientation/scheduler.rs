//! Scheduling onto the UI-owning context.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use tracing::warn;

/// A unit of work that must run on the UI context.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Posts work onto the context that owns window state.
///
/// Implementations must run posted tasks one at a time, in posting order.
pub trait UiScheduler: Send + Sync {
    fn post(&self, task: UiTask);
}

/// Runs tasks inline on the calling thread.
///
/// For hosts where the caller already is the UI context, and for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl UiScheduler for ImmediateScheduler {
    fn post(&self, task: UiTask) {
        task();
    }
}

/// FIFO queue of UI tasks drained explicitly by the UI loop.
pub struct TaskQueue {
    tx: Mutex<Sender<UiTask>>,
    rx: Mutex<Receiver<UiTask>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx: Mutex::new(tx),
            rx: Mutex::new(rx),
        }
    }

    /// Run every task posted so far. Returns how many ran.
    ///
    /// Call only from the UI context.
    pub fn run_pending(&self) -> usize {
        let drained: Vec<UiTask> = match self.rx.lock() {
            Ok(rx) => rx.try_iter().collect(),
            Err(_) => return 0,
        };
        let count = drained.len();
        for task in drained {
            task();
        }
        count
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl UiScheduler for TaskQueue {
    fn post(&self, task: UiTask) {
        let sent = self.tx.lock().map(|tx| tx.send(task).is_ok());
        if !matches!(sent, Ok(true)) {
            warn!("UI task dropped: queue unavailable");
        }
    }
}
