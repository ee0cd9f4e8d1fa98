use crate::domain::a001_catalog::ui::page::CataloguePage;
use crate::shared::config::AppConfig;
use crate::shared::dom::reveal_body;
use crate::shared::host::{detect_host, HostHandle};
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Host runtime is !Send, keep it in local storage
    let host: HostHandle = StoredValue::new_local(detect_host());
    host.with_value(|h| {
        h.ready();
        h.hide_main_button();
    });
    reveal_body();

    view! {
        <CataloguePage config=config host=host />
    }
}
