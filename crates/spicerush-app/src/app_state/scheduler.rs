//! UI scheduler that wakes the winit loop.

use std::sync::{Arc, Mutex};

use spicerush_webview::{TaskQueue, UiScheduler, UiTask};
use winit::event_loop::EventLoopProxy;

use super::types::AppEvent;

/// Queues UI tasks and nudges the event loop to drain them.
///
/// Tasks run in posting order when the loop handles
/// [`AppEvent::UiTasksPending`].
pub(super) struct ProxyScheduler {
    queue: Arc<TaskQueue>,
    proxy: Mutex<EventLoopProxy<AppEvent>>,
}

impl ProxyScheduler {
    pub(super) fn new(queue: Arc<TaskQueue>, proxy: EventLoopProxy<AppEvent>) -> Self {
        Self {
            queue,
            proxy: Mutex::new(proxy),
        }
    }
}

impl UiScheduler for ProxyScheduler {
    fn post(&self, task: UiTask) {
        self.queue.post(task);
        let woke = self
            .proxy
            .lock()
            .map(|proxy| proxy.send_event(AppEvent::UiTasksPending).is_ok());
        if !matches!(woke, Ok(true)) {
            tracing::debug!("event loop closed; queued UI task will not run");
        }
    }
}
