//! Transient Notifications
//!
//! Single-slot status message with a fixed auto-expiry window.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a message stays visible
#[cfg(target_arch = "wasm32")]
const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

/// Single-slot notification state
///
/// At most one message is live. A new `show` replaces the current
/// message and restarts the expiry window; the superseded timer is
/// cancelled so it cannot clear the newer message.
#[derive(Clone)]
pub struct Notifier {
    pub message: RwSignal<String>,
    pub visible: RwSignal<bool>,
    #[cfg(target_arch = "wasm32")]
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier {
            message: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
            #[cfg(target_arch = "wasm32")]
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Show a message and restart the expiry window
    pub fn show(&self, message: impl Into<String>) {
        self.message.set(message.into());
        self.visible.set(true);
        self.restart_timer();
    }

    #[cfg(target_arch = "wasm32")]
    fn restart_timer(&self) {
        let visible = self.visible;
        let next = Timeout::new(NOTIFICATION_TIMEOUT_MS, move || visible.set(false));
        if let Some(prev) = self.pending.borrow_mut().replace(next) {
            prev.cancel();
        }
    }

    // Timers only exist in the browser; native tests drive `visible`
    // directly.
    #[cfg(not(target_arch = "wasm32"))]
    fn restart_timer(&self) {}
}
