//! Small DOM helpers
//!
//! Missing targets are logged and skipped, never fatal.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The page body starts with `visibility: hidden` to avoid a flash of
/// unstyled content; show it once the app is mounted.
pub fn reveal_body() {
    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        Some(body) => {
            let _ = body.style().set_property("visibility", "visible");
        }
        None => log::warn!("document.body not found, cannot reveal page"),
    }
}

/// Smooth-scroll an element to the top of the viewport
pub fn scroll_into_view(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
