//! Recording host double for native tests

use super::HostRuntime;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Ready,
    ShowMainButton(String),
    HideMainButton,
    SendData(String),
    Alert(String),
    Confirm(String),
    OpenLink(String),
}

#[derive(Default)]
pub struct RecordingHost {
    pub events: RefCell<Vec<HostEvent>>,
    pub confirm_answer: Cell<bool>,
    pub send_failure: RefCell<Option<String>>,
    pub main_button_handler: RefCell<Option<Rc<dyn Fn()>>>,
}

impl RecordingHost {
    pub fn answering(confirm_answer: bool) -> Rc<Self> {
        let host = Self::default();
        host.confirm_answer.set(confirm_answer);
        Rc::new(host)
    }

    /// Host whose `send_data` always fails with `reason`
    pub fn failing_send(reason: &str) -> Rc<Self> {
        let host = Self::default();
        *host.send_failure.borrow_mut() = Some(reason.to_string());
        Rc::new(host)
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    pub fn sent_data(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::SendData(payload) => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn opened_links(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::OpenLink(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn click_main_button(&self) {
        let handler = self.main_button_handler.borrow().clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    fn record(&self, event: HostEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl HostRuntime for RecordingHost {
    fn is_embedded(&self) -> bool {
        true
    }

    fn ready(&self) {
        self.record(HostEvent::Ready);
    }

    fn show_main_button(&self, text: &str) {
        self.record(HostEvent::ShowMainButton(text.to_string()));
    }

    fn hide_main_button(&self) {
        self.record(HostEvent::HideMainButton);
    }

    fn set_main_button_handler(&self, handler: Option<Rc<dyn Fn()>>) {
        *self.main_button_handler.borrow_mut() = handler;
    }

    fn send_data(&self, payload: &str) -> Result<(), String> {
        if let Some(reason) = self.send_failure.borrow().clone() {
            return Err(reason);
        }
        self.record(HostEvent::SendData(payload.to_string()));
        Ok(())
    }

    fn show_alert(&self, message: &str) {
        self.record(HostEvent::Alert(message.to_string()));
    }

    fn show_confirm(&self, message: &str, on_result: Box<dyn FnOnce(bool)>) {
        self.record(HostEvent::Confirm(message.to_string()));
        on_result(self.confirm_answer.get());
    }

    fn open_link(&self, url: &str) {
        self.record(HostEvent::OpenLink(url.to_string()));
    }
}
