use super::details::{create_controller, run_order_action, ProductDetailView};
use super::filter::CategoryFilterMenu;
use super::list::ProductGrid;
use crate::domain::a001_catalog::api;
use crate::domain::a001_catalog::store::create_store;
use crate::shared::config::AppConfig;
use crate::shared::host::HostHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Catalogue screen: filter, grid and detail panel over one catalogue fetch
#[component]
pub fn CataloguePage(config: AppConfig, host: HostHandle) -> impl IntoView {
    let store = create_store();
    let controller = create_controller(config.order.clone());

    log::debug!(
        "Order policy: {:?}, main button: {}",
        config.order.policy,
        config.order.use_main_button
    );

    // MainButton Telegram дублирует кнопку заказа из панели товара
    if config.order.use_main_button {
        host.with_value(|h| {
            h.set_main_button_handler(Some(Rc::new(move || run_order_action(controller, host))));
        });
    }

    let catalog_url = config.catalog.url.clone();
    spawn_local(async move {
        match api::fetch_catalog(&catalog_url).await {
            Ok(raw) => store.update(|s| {
                if let Err(e) = s.load(raw) {
                    log::debug!("Catalogue payload rejected: {}", e);
                }
            }),
            Err(e) => store.update(|s| s.fail(e)),
        }
    });

    view! {
        <div class="catalogue">
            <header class="catalogue__header">
                <h1 class="catalogue__title">"Notre Catalogue"</h1>
                <CategoryFilterMenu store=store />
            </header>
            <ProductGrid store=store controller=controller host=host />
            <ProductDetailView controller=controller host=host />
        </div>
    }
}
