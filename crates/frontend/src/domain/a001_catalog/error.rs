use thiserror::Error;

/// Why the catalogue could not be loaded. Fatal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{0}")]
    NetworkOrHttpFailure(String),
    #[error("{0}")]
    MalformedPayload(String),
}

impl LoadError {
    /// Текст, который показывается вместо сетки товаров
    pub fn user_message(&self) -> String {
        format!(
            "Erreur lors du chargement des produits ({}). Vérifiez le fichier products.json.",
            self
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("contact link is still the placeholder, configure order.contact_url")]
    UnconfiguredDestination,
    #[error("no product is bound to the order action")]
    NoActiveBinding,
    #[error("{0}")]
    Encode(String),
    #[error("order message not delivered: {0}")]
    Delivery(String),
}

/// A direct `<video>` source failed to load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot play video {src}")]
pub struct VideoPlaybackError {
    pub src: String,
}
