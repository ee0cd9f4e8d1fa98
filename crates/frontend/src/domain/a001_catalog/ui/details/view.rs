use super::video::VideoRegion;
use super::view_model::{ViewController, ViewMode};
use crate::shared::dom::scroll_into_view;
use crate::shared::host::HostHandle;
use leptos::html;
use leptos::prelude::*;

/// Run the order action bound to the detail panel
pub fn run_order_action(controller: RwSignal<ViewController>, host: HostHandle) {
    let host = host.get_value();
    if let Err(e) = controller.with_untracked(|c| c.trigger_action(&host)) {
        log::warn!("Order action not performed: {}", e);
    }
}

#[component]
pub fn ProductDetailView(controller: RwSignal<ViewController>, host: HostHandle) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let detail = Memo::new(move |_| controller.with(|c| c.detail()));
    let video = Signal::derive(move || controller.with(|c| c.video().clone()));
    let is_visible = move || controller.with(|c| c.mode() == ViewMode::Detail);

    // Только новый выбор товара прокручивает панель к началу;
    // обновления видео и прочие изменения контроллера сюда не доходят
    let selection = Memo::new(move |_| controller.with(|c| c.selection_generation()));
    Effect::new(move |_| {
        if selection.get().is_none() {
            return;
        }
        match panel_ref.get() {
            Some(panel) => scroll_into_view(&panel),
            None => log::warn!("Detail panel not mounted, skipping scroll"),
        }
    });

    let handle_back = move |_| {
        host.with_value(|h| controller.update(|c| c.go_back(&**h)));
    };

    let handle_order = move |_| run_order_action(controller, host);

    let handle_video_loaded = Callback::new(move |_: ()| controller.update(|c| c.video_loaded()));
    let handle_video_error = Callback::new(move |_: ()| {
        controller.update(|c| {
            c.video_failed();
        })
    });

    view! {
        <div
            node_ref=panel_ref
            id="product-detail-view"
            class="product-detail"
            style:display=move || if is_visible() { "block" } else { "none" }
        >
            <button class="product-detail__back" on:click=handle_back>
                "← Retour"
            </button>
            {move || {
                detail
                    .get()
                    .map(|d| {
                        let photo = if d.photo.is_empty() {
                            log::debug!("Product '{}' has no photo", d.name);
                            None
                        } else {
                            Some(view! {
                                <img class="product-detail__photo" src=d.photo.clone() alt=d.name.clone() />
                            })
                        };
                        let rows = d.size_rows();
                        view! {
                            <h2 class="product-detail__name">{d.name.clone()}</h2>
                            {photo}
                            <VideoRegion
                                panel=video
                                on_loaded=handle_video_loaded
                                on_error=handle_video_error
                            />
                            <p class="product-detail__desc">{d.description.clone()}</p>
                            <h4 class="product-detail__sizes-title">"Tailles disponibles"</h4>
                            <ul class="product-detail__sizes">
                                {rows.into_iter().map(|row| view! { <li>{row}</li> }).collect_view()}
                            </ul>
                            <button class="btn btn-primary product-detail__order" on:click=handle_order>
                                {d.order_label.clone()}
                            </button>
                        }
                    })
            }}
        </div>
    }
}
