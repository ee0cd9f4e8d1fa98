use crate::domain::a001_catalog::store::CatalogStore;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Category filter button with its dropdown.
///
/// A click anywhere outside the control closes the dropdown.
#[component]
pub fn CategoryFilterMenu(store: RwSignal<CatalogStore>) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let root_ref = NodeRef::<html::Div>::new();

    let _ = window_event_listener(leptos::ev::click, move |ev: leptos::ev::MouseEvent| {
        if !is_open.get_untracked() {
            return;
        }
        let target = ev.target();
        let inside = match (root_ref.get_untracked(), target.as_ref()) {
            (Some(root), Some(target)) => root.contains(target.dyn_ref::<web_sys::Node>()),
            _ => false,
        };
        if !inside {
            is_open.set(false);
        }
    });

    let button_label = move || {
        store.with(|s| format!("{} 🔄", s.active_filter().label()))
    };

    view! {
        <div class="category-filter" node_ref=root_ref>
            <button
                id="category-filter-btn"
                class="category-filter__button"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {button_label}
            </button>
            <div
                id="category-list"
                class="category-filter__list"
                style:display=move || if is_open.get() { "block" } else { "none" }
            >
                {move || {
                    store.with(|s| {
                        let active = s.active_filter().clone();
                        s.categories()
                            .iter()
                            .map(|filter| {
                                let is_active = *filter == active;
                                let label = if is_active {
                                    format!("✓ {}", filter.label())
                                } else {
                                    filter.label().to_string()
                                };
                                let value = filter.value().to_string();
                                let data_value = value.clone();
                                view! {
                                    <div
                                        class="category-item"
                                        class:active=is_active
                                        data-category=data_value
                                        on:click=move |_| {
                                            store.update(|s| s.set_filter(&value));
                                            is_open.set(false);
                                        }
                                    >
                                        {label}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}
