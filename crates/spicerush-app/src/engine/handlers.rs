use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use spicerush_webview::{IpcMessage, NavigationEvent, NavigationSink, ScriptHandlerTable};
use tracing::{debug, warn};
use wry::{PageLoadEvent, WebViewBuilder};

/// Route IPC envelopes: progress reports to the sink, everything else to
/// the channel's script message handler.
pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    handlers: Arc<ScriptHandlerTable>,
    sink: NavigationSink,
    loading: Arc<AtomicBool>,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        let Some(message) = IpcMessage::from_json(body) else {
            warn!(body_len = body.len(), "IPC message rejected: invalid envelope");
            return;
        };

        if let Some(fraction) = message.progress() {
            if loading.load(Ordering::Acquire) {
                sink.dispatch(NavigationEvent::Progress(fraction));
            }
            return;
        }

        debug!(channel = %message.kind, "IPC message from JS");
        handlers.dispatch(&message.kind, message.payload);
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: NavigationSink,
    loading: Arc<AtomicBool>,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        match event {
            PageLoadEvent::Started => {
                debug!(url = %url, "page load started");
                loading.store(true, Ordering::Release);
                sink.dispatch(NavigationEvent::Started);
            }
            PageLoadEvent::Finished => {
                debug!(url = %url, "page load finished");
                loading.store(false, Ordering::Release);
                sink.dispatch(NavigationEvent::Finished);
            }
        }
    })
}
