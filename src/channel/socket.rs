use super::frame::{parse_frame, Notification};
use super::machine::ChannelMachine;
use crate::config::DeviceConfig;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error, info, warn};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

type Handler = Rc<dyn Fn(Notification)>;

// Kept alive for as long as the socket they are attached to.
struct SocketHandlers {
    _on_open: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
}

struct Inner {
    url: String,
    machine: ChannelMachine,
    socket: Option<WebSocket>,
    handlers: Option<SocketHandlers>,
    /// Bumped by `stop` so that an already scheduled reconnect does nothing.
    epoch: u64,
    on_notification: Handler,
}

/// Persistent push connection to the gateway, reconnecting with backoff.
#[derive(Clone)]
pub struct NotificationChannel {
    inner: Rc<RefCell<Inner>>,
}

impl NotificationChannel {
    pub fn new(url: impl Into<String>, on_notification: impl Fn(Notification) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                url: url.into(),
                machine: ChannelMachine::default(),
                socket: None,
                handlers: None,
                epoch: 0,
                on_notification: Rc::new(on_notification),
            })),
        }
    }

    pub fn start(&self) {
        if self.inner.borrow_mut().machine.begin_connect() {
            open_socket(&self.inner);
        }
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        let previous = inner.machine.state();
        inner.machine.stop();
        inner.epoch += 1;
        if let Some(socket) = inner.socket.take() {
            detach(&socket);
            if let Err(err) = socket.close() {
                warn!("closing notification socket failed: {err:?}");
            }
        }
        inner.handlers = None;
        info!(?previous, "notification channel stopped");
    }
}

fn detach(socket: &WebSocket) {
    socket.set_onopen(None);
    socket.set_onclose(None);
    socket.set_onerror(None);
    socket.set_onmessage(None);
}

/// Create the socket for an attempt the machine already moved to `Connecting`.
fn open_socket(inner_rc: &Rc<RefCell<Inner>>) {
    let mut inner = inner_rc.borrow_mut();

    // The previous socket is closed by now; make sure it can no longer call in.
    if let Some(previous) = inner.socket.take() {
        detach(&previous);
    }
    inner.handlers = None;

    let socket = match WebSocket::new(&inner.url) {
        Ok(socket) => socket,
        Err(err) => {
            error!("cannot open notification socket to {}: {err:?}", inner.url);
            drop(inner);
            schedule_reconnect(inner_rc);
            return;
        }
    };

    let weak = Rc::downgrade(inner_rc);
    let on_open = {
        let weak = weak.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let Some(inner_rc) = weak.upgrade() else {
                return;
            };
            if inner_rc.borrow_mut().machine.opened() {
                info!("notification channel open");
            }
        })
    };

    let on_close = {
        let weak = weak.clone();
        Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            let Some(inner_rc) = weak.upgrade() else {
                return;
            };
            info!(
                code = event.code(),
                clean = event.was_clean(),
                "notification channel closed"
            );
            schedule_reconnect(&inner_rc);
        })
    };

    let on_error = {
        let weak = weak.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let Some(inner_rc) = weak.upgrade() else {
                return;
            };
            warn!("notification channel error, forcing close");
            schedule_reconnect(&inner_rc);
            let socket = inner_rc.borrow().socket.clone();
            if let Some(socket) = socket {
                if let Err(err) = socket.close() {
                    warn!("closing notification socket failed: {err:?}");
                }
            }
        })
    };

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        let Some(inner_rc) = weak.upgrade() else {
            return;
        };
        let Some(text) = event.data().as_string() else {
            warn!("ignoring non-text notification frame");
            return;
        };
        debug!("notification frame: {text}");
        match parse_frame(&text) {
            Ok(Notification::Unknown) => {}
            Ok(notification) => {
                let handler = inner_rc.borrow().on_notification.clone();
                handler(notification);
            }
            Err(err) => warn!("dropping malformed notification frame: {err}"),
        }
    });

    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    info!("connecting notification channel to {}", inner.url);
    inner.socket = Some(socket);
    inner.handlers = Some(SocketHandlers {
        _on_open: on_open,
        _on_close: on_close,
        _on_error: on_error,
        _on_message: on_message,
    });
}

/// Record the failure and arm the reconnect timer, unless one is pending.
fn schedule_reconnect(inner_rc: &Rc<RefCell<Inner>>) {
    let (delay_ms, epoch) = {
        let mut inner = inner_rc.borrow_mut();
        match inner.machine.closed() {
            Some(delay_ms) => (delay_ms, inner.epoch),
            None => return,
        }
    };
    info!("reconnecting notification channel in {delay_ms} ms");

    let weak = Rc::downgrade(inner_rc);
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let Some(inner_rc) = weak.upgrade() else {
            return;
        };
        let due = {
            let mut inner = inner_rc.borrow_mut();
            inner.epoch == epoch && inner.machine.retry_due()
        };
        if due {
            open_socket(&inner_rc);
        }
    });
}

/// Keep a notification channel open for the lifetime of the calling component.
pub fn use_notification_channel(
    on_notification: impl Fn(Notification) + 'static,
) -> NotificationChannel {
    let channel = use_hook(move || {
        let channel = NotificationChannel::new(DeviceConfig::from_window().ws_url, on_notification);
        channel.start();
        channel
    });

    let on_unmount = channel.clone();
    use_drop(move || on_unmount.stop());

    channel
}
