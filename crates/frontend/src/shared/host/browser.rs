use super::HostRuntime;
use std::rc::Rc;

/// Fallback outside Telegram: native dialogs, console log, new tab
pub struct BrowserHost;

impl HostRuntime for BrowserHost {
    fn is_embedded(&self) -> bool {
        false
    }

    fn ready(&self) {
        log::debug!("Browser mode: nothing to signal on ready");
    }

    fn show_main_button(&self, text: &str) {
        log::debug!("Browser mode: main button '{}' not available", text);
    }

    fn hide_main_button(&self) {}

    fn set_main_button_handler(&self, _handler: Option<Rc<dyn Fn()>>) {}

    fn send_data(&self, payload: &str) -> Result<(), String> {
        log::info!("Data to send: {}", payload);
        Ok(())
    }

    fn show_alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn show_confirm(&self, message: &str, on_result: Box<dyn FnOnce(bool)>) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false);
        on_result(confirmed);
    }

    fn open_link(&self, url: &str) {
        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
            .flatten();
        if opened.is_none() {
            log::warn!("Could not open {} in a new tab (popup blocked?)", url);
        }
    }
}
