use super::{BrowserHost, HostRuntime, PendingAnswer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// JS bindings для `window.Telegram.WebApp`
#[wasm_bindgen]
extern "C" {
    pub type WebApp;

    #[wasm_bindgen(method)]
    fn ready(this: &WebApp);

    #[wasm_bindgen(method, catch, js_name = sendData)]
    fn send_data(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showAlert)]
    fn show_alert(this: &WebApp, message: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showConfirm)]
    fn show_confirm(this: &WebApp, message: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openLink)]
    fn open_link(this: &WebApp, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter = MainButton)]
    fn main_button(this: &WebApp) -> MainButton;

    pub type MainButton;

    #[wasm_bindgen(method)]
    fn show(this: &MainButton);

    #[wasm_bindgen(method)]
    fn hide(this: &MainButton);

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &MainButton, text: &str);

    #[wasm_bindgen(method, js_name = onClick)]
    fn on_click(this: &MainButton, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = offClick)]
    fn off_click(this: &MainButton, callback: &js_sys::Function);
}

pub struct TelegramHost {
    web_app: WebApp,
    // Текущий обработчик MainButton; хранится, чтобы его можно было снять
    main_button_handler: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TelegramHost {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if web_app.is_undefined() || web_app.is_null() {
            return None;
        }
        Some(Self {
            web_app: web_app.unchecked_into::<WebApp>(),
            main_button_handler: RefCell::new(None),
        })
    }
}

impl HostRuntime for TelegramHost {
    fn is_embedded(&self) -> bool {
        true
    }

    fn ready(&self) {
        self.web_app.ready();
    }

    fn show_main_button(&self, text: &str) {
        let button = self.web_app.main_button();
        button.set_text(text);
        button.show();
    }

    fn hide_main_button(&self) {
        self.web_app.main_button().hide();
    }

    fn set_main_button_handler(&self, handler: Option<Rc<dyn Fn()>>) {
        let button = self.web_app.main_button();
        let mut slot = self.main_button_handler.borrow_mut();

        if let Some(previous) = slot.take() {
            button.off_click(previous.as_ref().unchecked_ref());
        }

        if let Some(handler) = handler {
            let closure = Closure::<dyn FnMut()>::new(move || handler());
            button.on_click(closure.as_ref().unchecked_ref());
            *slot = Some(closure);
        }
    }

    fn send_data(&self, payload: &str) -> Result<(), String> {
        self.web_app
            .send_data(payload)
            .map_err(|e| format!("Telegram sendData failed: {:?}", e))
    }

    fn show_alert(&self, message: &str) {
        if let Err(e) = self.web_app.show_alert(message) {
            log::warn!("Telegram showAlert failed, using window.alert: {:?}", e);
            BrowserHost.show_alert(message);
        }
    }

    fn show_confirm(&self, message: &str, on_result: Box<dyn FnOnce(bool)>) {
        let pending = PendingAnswer::new(on_result);
        let from_js = pending.clone();
        let callback = Closure::once_into_js(move |confirmed: bool| {
            from_js.answer(confirmed);
        });
        // Старые клиенты (< 6.2) бросают исключение; спрашиваем через window.confirm
        if let Err(e) = self.web_app.show_confirm(message, &callback) {
            log::warn!("Telegram showConfirm failed, using window.confirm: {:?}", e);
            if let Some(on_result) = pending.take() {
                BrowserHost.show_confirm(message, on_result);
            }
        }
    }

    fn open_link(&self, url: &str) {
        if let Err(e) = self.web_app.open_link(url) {
            log::error!("Telegram openLink failed for {}: {:?}", url, e);
        }
    }
}
