use super::video::VideoPanel;
use crate::domain::a001_catalog::error::{ActionError, VideoPlaybackError};
use crate::shared::config::{ActionPolicy, OrderConfig};
use crate::shared::host::HostRuntime;
use contracts::domain::a001_product::{OrderMessage, Product};
use leptos::prelude::*;
use std::rc::Rc;

pub const SIZE_UNSPECIFIED: &str = "Taille non spécifiée";
pub const UNCONFIGURED_CONTACT_MESSAGE: &str = "Le lien de contact n'est pas encore configuré.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Impossible d'envoyer votre demande. Veuillez réessayer plus tard.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Detail,
}

/// The product the order control currently acts on.
///
/// There is at most one binding; installing a new one drops the previous
/// one, so repeated selections never stack handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionBinding {
    pub product: Product,
    pub label: String,
    pub generation: u64,
}

impl ActionBinding {
    fn for_product(product: Product, generation: u64) -> Self {
        Self {
            label: format!("Commander {}", product.nom),
            product,
            generation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Message handed to the host and toast shown
    Notified,
    /// Confirmation prompt shown; navigation happens on "yes"
    ConfirmRequested,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeRows {
    Listed(Vec<String>),
    Unspecified,
}

/// Everything the detail panel displays for one product
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetail {
    pub name: String,
    pub photo: String,
    pub description: String,
    pub sizes: SizeRows,
    pub order_label: String,
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        let sizes = match product.sizes() {
            [] => SizeRows::Unspecified,
            sizes => SizeRows::Listed(sizes.to_vec()),
        };
        Self {
            name: product.nom.clone(),
            photo: product.photo.clone(),
            description: product.desc.clone(),
            sizes,
            order_label: format!("Commander {}", product.nom),
        }
    }

    /// Rows of the size list; a single placeholder row when no size is known
    pub fn size_rows(&self) -> Vec<String> {
        match &self.sizes {
            SizeRows::Listed(sizes) => sizes.clone(),
            SizeRows::Unspecified => vec![SIZE_UNSPECIFIED.to_string()],
        }
    }
}

/// Grid/Detail state machine plus the pending order action.
///
/// `selected` is `Some` exactly when `mode == Detail`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewController {
    mode: ViewMode,
    selected: Option<Product>,
    binding: Option<ActionBinding>,
    video: VideoPanel,
    order: OrderConfig,
    generation: u64,
}

impl ViewController {
    pub fn new(order: OrderConfig) -> Self {
        Self {
            mode: ViewMode::Grid,
            selected: None,
            binding: None,
            video: VideoPanel::Hidden,
            order,
            generation: 0,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn binding(&self) -> Option<&ActionBinding> {
        self.binding.as_ref()
    }

    pub fn video(&self) -> &VideoPanel {
        &self.video
    }

    /// Changes only when a product is (re)selected or the panel is closed
    pub fn selection_generation(&self) -> Option<u64> {
        self.binding.as_ref().map(|b| b.generation)
    }

    /// Grid -> Detail
    pub fn select_product(&mut self, product: Product, host: &dyn HostRuntime) {
        log::debug!("Product selected: {} ({})", product.nom, product.id);
        self.video = VideoPanel::for_product(&product);
        self.generation += 1;
        let binding = ActionBinding::for_product(product.clone(), self.generation);

        if self.order.use_main_button {
            host.show_main_button(&binding.label);
        } else {
            host.hide_main_button();
        }

        self.rebind(binding);
        self.selected = Some(product);
        self.mode = ViewMode::Detail;
    }

    /// Detail -> Grid. A no-op in Grid mode.
    pub fn go_back(&mut self, host: &dyn HostRuntime) {
        if self.mode == ViewMode::Grid && self.selected.is_none() {
            return;
        }
        log::debug!("Back to the product grid");
        self.mode = ViewMode::Grid;
        self.selected = None;
        self.binding = None;
        self.video = VideoPanel::Hidden;
        host.hide_main_button();
    }

    /// Install the binding for the order control, returning the one it
    /// replaced
    pub fn rebind(&mut self, binding: ActionBinding) -> Option<ActionBinding> {
        self.binding.replace(binding)
    }

    pub fn detail(&self) -> Option<ProductDetail> {
        self.selected.as_ref().map(ProductDetail::from_product)
    }

    pub fn video_loaded(&mut self) {
        self.video.mark_loaded();
    }

    pub fn video_failed(&mut self) -> Option<VideoPlaybackError> {
        let error = self.video.fail();
        if let Some(e) = &error {
            log::warn!("{}", e);
        }
        error
    }

    /// Run the order action for whatever product is currently bound.
    /// Only available in Detail mode.
    pub fn trigger_action(&self, host: &Rc<dyn HostRuntime>) -> Result<ActionOutcome, ActionError> {
        match (&self.binding, self.mode) {
            (Some(binding), ViewMode::Detail) => self.confirm_action(&binding.product, host),
            _ => Err(ActionError::NoActiveBinding),
        }
    }

    pub fn confirm_action(
        &self,
        product: &Product,
        host: &Rc<dyn HostRuntime>,
    ) -> Result<ActionOutcome, ActionError> {
        log::info!("Order button clicked for: {} ({})", product.nom, product.id);
        match self.order.policy {
            ActionPolicy::Notify => {
                let payload = OrderMessage::order_product(product.clone())
                    .to_json()
                    .map_err(|e| ActionError::Encode(e.to_string()))?;
                if let Err(reason) = host.send_data(&payload) {
                    let error = ActionError::Delivery(reason);
                    log::error!("{}", error);
                    host.show_alert(DELIVERY_FAILED_MESSAGE);
                    return Err(error);
                }
                host.show_alert(&format!(
                    "Votre intérêt pour \"{}\" a été signalé !",
                    product.nom
                ));
                Ok(ActionOutcome::Notified)
            }
            ActionPolicy::Redirect => {
                let Some(destination) = self.order.contact_destination() else {
                    log::error!("{}", ActionError::UnconfiguredDestination);
                    host.show_alert(UNCONFIGURED_CONTACT_MESSAGE);
                    return Err(ActionError::UnconfiguredDestination);
                };
                let destination = destination.to_string();
                let opener = Rc::clone(host);
                host.show_confirm(
                    &format!("Contacter le vendeur au sujet de \"{}\" ?", product.nom),
                    Box::new(move |confirmed| {
                        if confirmed {
                            opener.open_link(&destination);
                        } else {
                            log::debug!("Contact redirect cancelled");
                        }
                    }),
                );
                Ok(ActionOutcome::ConfirmRequested)
            }
        }
    }
}

pub fn create_controller(order: OrderConfig) -> RwSignal<ViewController> {
    RwSignal::new(ViewController::new(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::CONTACT_URL_PLACEHOLDER;
    use crate::shared::host::testing::{HostEvent, RecordingHost};
    use std::cell::RefCell;

    fn shirt() -> Product {
        Product::new(1, "Shirt").with_category("Tops").with_sizes(["S", "M"])
    }

    fn hat() -> Product {
        Product::new(2, "Hat").with_category("Accessories")
    }

    fn notify() -> ViewController {
        ViewController::new(OrderConfig::default())
    }

    fn redirect(contact_url: &str) -> ViewController {
        ViewController::new(OrderConfig {
            policy: ActionPolicy::Redirect,
            contact_url: contact_url.to_string(),
            use_main_button: false,
        })
    }

    fn assert_selection_invariant(ctl: &ViewController) {
        assert_eq!(ctl.selected().is_some(), ctl.mode() == ViewMode::Detail);
    }

    #[test]
    fn test_starts_in_grid() {
        let ctl = notify();
        assert_eq!(ctl.mode(), ViewMode::Grid);
        assert!(ctl.binding().is_none());
        assert!(ctl.detail().is_none());
        assert_selection_invariant(&ctl);
    }

    #[test]
    fn test_select_enters_detail() {
        let host = RecordingHost::answering(true);
        let mut ctl = notify();

        ctl.select_product(shirt(), &*host);

        assert_eq!(ctl.mode(), ViewMode::Detail);
        assert_eq!(ctl.selected(), Some(&shirt()));
        assert_eq!(ctl.binding().map(|b| b.label.as_str()), Some("Commander Shirt"));
        assert_selection_invariant(&ctl);
    }

    #[test]
    fn test_go_back_returns_to_grid() {
        let host = RecordingHost::answering(true);
        let mut ctl = notify();
        ctl.select_product(shirt(), &*host);

        ctl.go_back(&*host);

        assert_eq!(ctl.mode(), ViewMode::Grid);
        assert!(ctl.selected().is_none());
        assert!(ctl.binding().is_none());
        assert_eq!(ctl.video(), &VideoPanel::Hidden);
        assert_selection_invariant(&ctl);
    }

    #[test]
    fn test_go_back_in_grid_is_noop() {
        let host = RecordingHost::answering(true);
        let mut ctl = notify();
        let before = ctl.clone();

        ctl.go_back(&*host);
        ctl.go_back(&*host);

        assert_eq!(ctl, before);
        assert!(host.events().is_empty());
    }

    #[test]
    fn test_reselect_acts_on_latest_product_only() {
        let host = RecordingHost::answering(true);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = notify();

        ctl.select_product(shirt(), &*host);
        ctl.select_product(hat(), &*host);

        assert_eq!(ctl.binding().map(|b| b.generation), Some(2));
        ctl.trigger_action(&dyn_host).unwrap();

        let sent = host.sent_data();
        assert_eq!(sent.len(), 1);
        let message = OrderMessage::from_json(&sent[0]).unwrap();
        assert_eq!(message.product, hat());
    }

    #[test]
    fn test_rebind_replaces_previous_binding() {
        let mut ctl = notify();
        let first = ActionBinding::for_product(shirt(), 1);
        let second = ActionBinding::for_product(hat(), 2);

        assert_eq!(ctl.rebind(first.clone()), None);
        assert_eq!(ctl.rebind(second.clone()), Some(first));
        assert_eq!(ctl.binding(), Some(&second));
    }

    #[test]
    fn test_notify_sends_message_then_toast() {
        let host = RecordingHost::answering(true);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = notify();
        ctl.select_product(shirt(), &*host);

        let outcome = ctl.trigger_action(&dyn_host);

        assert_eq!(outcome, Ok(ActionOutcome::Notified));
        let events = host.events();
        let tail = &events[events.len() - 2..];
        assert!(matches!(&tail[0], HostEvent::SendData(_)));
        assert_eq!(
            tail[1],
            HostEvent::Alert("Votre intérêt pour \"Shirt\" a été signalé !".to_string())
        );

        let json: serde_json::Value = serde_json::from_str(&host.sent_data()[0]).unwrap();
        assert_eq!(json["action"], "order_product");
        assert_eq!(json["product"]["nom"], "Shirt");
        assert_eq!(json["product"]["tailles"], serde_json::json!(["S", "M"]));
    }

    #[test]
    fn test_notify_delivery_failure_skips_success_toast() {
        let host = RecordingHost::failing_send("WebAppDataInvalid");
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = notify();
        ctl.select_product(shirt(), &*host);

        let outcome = ctl.trigger_action(&dyn_host);

        assert_eq!(
            outcome,
            Err(ActionError::Delivery("WebAppDataInvalid".to_string()))
        );
        assert!(host.sent_data().is_empty());
        assert_eq!(
            host.events().last(),
            Some(&HostEvent::Alert(DELIVERY_FAILED_MESSAGE.to_string()))
        );
        assert!(!host
            .events()
            .iter()
            .any(|e| matches!(e, HostEvent::Alert(m) if m.contains("signalé"))));
    }

    #[test]
    fn test_video_updates_keep_selection_generation() {
        let host = RecordingHost::answering(true);
        let mut ctl = notify();
        assert_eq!(ctl.selection_generation(), None);

        ctl.select_product(shirt().with_video_url("videos/demo.mp4"), &*host);
        let first = ctl.selection_generation();
        assert!(first.is_some());

        ctl.video_loaded();
        assert_eq!(ctl.selection_generation(), first);
        ctl.video_failed();
        assert_eq!(ctl.selection_generation(), first);

        ctl.select_product(hat(), &*host);
        assert_ne!(ctl.selection_generation(), first);

        ctl.go_back(&*host);
        assert_eq!(ctl.selection_generation(), None);
    }

    #[test]
    fn test_redirect_opens_link_after_confirmation() {
        let host = RecordingHost::answering(true);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = redirect("https://t.me/croquettes_support");
        ctl.select_product(hat(), &*host);

        let outcome = ctl.trigger_action(&dyn_host);

        assert_eq!(outcome, Ok(ActionOutcome::ConfirmRequested));
        assert!(host
            .events()
            .contains(&HostEvent::Confirm("Contacter le vendeur au sujet de \"Hat\" ?".to_string())));
        assert_eq!(host.opened_links(), vec!["https://t.me/croquettes_support"]);
        assert!(host.sent_data().is_empty());
    }

    #[test]
    fn test_redirect_declined_does_not_navigate() {
        let host = RecordingHost::answering(false);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = redirect("https://t.me/croquettes_support");
        ctl.select_product(hat(), &*host);

        assert_eq!(ctl.trigger_action(&dyn_host), Ok(ActionOutcome::ConfirmRequested));
        assert!(host.opened_links().is_empty());
    }

    #[test]
    fn test_redirect_placeholder_fails_safely() {
        let host = RecordingHost::answering(true);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = redirect(CONTACT_URL_PLACEHOLDER);
        ctl.select_product(hat(), &*host);

        let outcome = ctl.confirm_action(&hat(), &dyn_host);

        assert_eq!(outcome, Err(ActionError::UnconfiguredDestination));
        assert!(host
            .events()
            .contains(&HostEvent::Alert(UNCONFIGURED_CONTACT_MESSAGE.to_string())));
        assert!(!host.events().iter().any(|e| matches!(e, HostEvent::Confirm(_))));
        assert!(host.opened_links().is_empty());
    }

    #[test]
    fn test_action_unavailable_in_grid() {
        let host = RecordingHost::answering(true);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let mut ctl = notify();

        assert_eq!(ctl.trigger_action(&dyn_host), Err(ActionError::NoActiveBinding));

        ctl.select_product(shirt(), &*host);
        ctl.go_back(&*host);
        assert_eq!(ctl.trigger_action(&dyn_host), Err(ActionError::NoActiveBinding));
        assert!(host.sent_data().is_empty());
    }

    #[test]
    fn test_main_button_mirrors_order_control() {
        let host = RecordingHost::answering(true);
        let mut ctl = ViewController::new(OrderConfig {
            use_main_button: true,
            ..OrderConfig::default()
        });

        ctl.select_product(shirt(), &*host);
        ctl.go_back(&*host);

        assert_eq!(
            host.events(),
            vec![
                HostEvent::ShowMainButton("Commander Shirt".to_string()),
                HostEvent::HideMainButton,
            ]
        );
    }

    #[test]
    fn test_main_button_handler_runs_current_binding() {
        let host = RecordingHost::answering(true);
        let dyn_host: Rc<dyn HostRuntime> = host.clone();
        let ctl = Rc::new(RefCell::new(ViewController::new(OrderConfig {
            use_main_button: true,
            ..OrderConfig::default()
        })));

        let handler_ctl = Rc::clone(&ctl);
        let handler_host = Rc::clone(&dyn_host);
        dyn_host.set_main_button_handler(Some(Rc::new(move || {
            let _ = handler_ctl.borrow().trigger_action(&handler_host);
        })));

        ctl.borrow_mut().select_product(shirt(), &*host);
        ctl.borrow_mut().select_product(hat(), &*host);
        host.click_main_button();

        let sent = host.sent_data();
        assert_eq!(sent.len(), 1);
        assert_eq!(OrderMessage::from_json(&sent[0]).unwrap().product, hat());
    }

    #[test]
    fn test_missing_sizes_render_placeholder_row() {
        let detail = ProductDetail::from_product(&hat());
        assert_eq!(detail.sizes, SizeRows::Unspecified);
        assert_eq!(detail.size_rows(), vec!["Taille non spécifiée"]);

        let empty = ProductDetail::from_product(&hat().with_sizes(Vec::<String>::new()));
        assert_eq!(empty.size_rows(), vec!["Taille non spécifiée"]);

        let listed = ProductDetail::from_product(&shirt());
        assert_eq!(listed.size_rows(), vec!["S", "M"]);
    }

    #[test]
    fn test_selection_resets_video_region() {
        let host = RecordingHost::answering(true);
        let mut ctl = notify();

        ctl.select_product(
            Product::new(3, "Demo").with_video_url("https://example.com/broken.mp4"),
            &*host,
        );
        assert!(ctl.video_failed().is_some());
        assert!(ctl.video().is_visible());

        ctl.select_product(
            Product::new(4, "Clip").with_video_url("https://youtu.be/abc123"),
            &*host,
        );
        assert!(ctl.video().is_embed());
        assert_eq!(ctl.video_failed(), None);

        ctl.select_product(hat(), &*host);
        assert!(!ctl.video().is_visible());
    }
}
