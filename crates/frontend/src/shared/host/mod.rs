//! Host runtime capabilities
//!
//! The Mini App runs either inside Telegram (`window.Telegram.WebApp` is
//! present) or in a plain browser tab during development. Both expose the
//! same capability set; the catalogue code only talks to [`HostRuntime`].

pub mod browser;
pub mod telegram;

#[cfg(test)]
pub mod testing;

use leptos::prelude::{LocalStorage, StoredValue};
use std::cell::RefCell;
use std::rc::Rc;

pub use browser::BrowserHost;
pub use telegram::TelegramHost;

pub trait HostRuntime {
    /// `true` inside the Telegram client
    fn is_embedded(&self) -> bool;

    /// Tell the host the app has finished booting
    fn ready(&self);

    fn show_main_button(&self, text: &str);

    fn hide_main_button(&self);

    /// Replace the main button click handler. The previous handler is always
    /// removed first, `None` just removes it.
    fn set_main_button_handler(&self, handler: Option<Rc<dyn Fn()>>);

    /// Forward a structured message to the bot. `Err` carries the host's
    /// reason when nothing was sent.
    fn send_data(&self, payload: &str) -> Result<(), String>;

    fn show_alert(&self, message: &str);

    /// Ask a yes/no question; `on_result` receives the answer
    fn show_confirm(&self, message: &str, on_result: Box<dyn FnOnce(bool)>);

    /// Open an external link outside the Mini App
    fn open_link(&self, url: &str);
}

/// Host handle usable from reactive closures (Rc is not Send)
pub type HostHandle = StoredValue<Rc<dyn HostRuntime>, LocalStorage>;

/// Pick the Telegram host when the WebApp object is available,
/// the browser fallback otherwise
pub fn detect_host() -> Rc<dyn HostRuntime> {
    match TelegramHost::detect() {
        Some(host) => {
            log::info!("Telegram WebApp detected");
            Rc::new(host)
        }
        None => {
            log::warn!("Telegram WebApp API not found, running in browser mode");
            Rc::new(BrowserHost)
        }
    }
}

/// Confirm callback that runs at most once, whichever path answers first:
/// the host's own dialog or a fallback after the host call failed
#[derive(Clone)]
pub struct PendingAnswer(Rc<RefCell<Option<Box<dyn FnOnce(bool)>>>>);

impl PendingAnswer {
    pub fn new(on_result: Box<dyn FnOnce(bool)>) -> Self {
        Self(Rc::new(RefCell::new(Some(on_result))))
    }

    /// Deliver the answer; `false` when it was already delivered or taken
    pub fn answer(&self, confirmed: bool) -> bool {
        match self.take() {
            Some(on_result) => {
                on_result(confirmed);
                true
            }
            None => false,
        }
    }

    /// Hand the callback to another dialog
    pub fn take(&self) -> Option<Box<dyn FnOnce(bool)>> {
        self.0.borrow_mut().take()
    }
}
