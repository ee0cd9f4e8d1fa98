pub mod state;

use super::details::{ViewController, ViewMode};
use crate::domain::a001_catalog::store::CatalogStore;
use crate::shared::host::HostHandle;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use state::{GridContent, EMPTY_CATEGORY_MESSAGE, LOADING_MESSAGE};

#[component]
pub fn ProductGrid(
    store: RwSignal<CatalogStore>,
    controller: RwSignal<ViewController>,
    host: HostHandle,
) -> impl IntoView {
    let content = Memo::new(move |_| store.with(GridContent::from_store));
    let is_visible = move || controller.with(|c| c.mode() == ViewMode::Grid);

    let on_select = Callback::new(move |product: Product| {
        host.with_value(|h| controller.update(|c| c.select_product(product, &**h)));
    });

    view! {
        <div
            id="product-grid"
            class="product-grid"
            style:display=move || if is_visible() { "grid" } else { "none" }
        >
            {move || match content.get() {
                GridContent::Loading => view! {
                    <p class="product-grid__message">{LOADING_MESSAGE}</p>
                }
                .into_any(),
                GridContent::Failed(message) => view! {
                    <p class="product-grid__message product-grid__message--error">{message}</p>
                }
                .into_any(),
                GridContent::Empty => view! {
                    <p class="product-grid__message">{EMPTY_CATEGORY_MESSAGE}</p>
                }
                .into_any(),
                GridContent::Cards(products) => products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product on_select=on_select /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

/// Карточка товара; обработчик клика держит свою копию товара
#[component]
pub fn ProductCard(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let id = product.id.to_string();
    let name = product.nom.clone();
    let photo = product.photo.clone();
    let desc = product.desc.clone();

    view! {
        <div
            class="product-card"
            data-product-id=id
            on:click=move |_| on_select.run(product.clone())
        >
            <img src=photo alt=name.clone() loading="lazy" />
            <div class="product-info">
                <h4>{name}</h4>
                <p>{desc}</p>
            </div>
        </div>
    }
}
