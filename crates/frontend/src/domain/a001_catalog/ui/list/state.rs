use crate::domain::a001_catalog::store::{CatalogStore, LoadStatus};
use contracts::domain::a001_product::Product;

pub const LOADING_MESSAGE: &str = "Chargement du catalogue…";
pub const EMPTY_CATEGORY_MESSAGE: &str = "Aucun produit trouvé pour cette catégorie.";

/// What the grid region shows; rebuilt from scratch on every change
#[derive(Clone, Debug, PartialEq)]
pub enum GridContent {
    Loading,
    Failed(String),
    Empty,
    Cards(Vec<Product>),
}

impl GridContent {
    pub fn from_store(store: &CatalogStore) -> Self {
        match store.status() {
            LoadStatus::Pending => GridContent::Loading,
            LoadStatus::Failed(error) => GridContent::Failed(error.user_message()),
            LoadStatus::Loaded => {
                let visible = store.visible_products();
                if visible.is_empty() {
                    GridContent::Empty
                } else {
                    GridContent::Cards(visible.into_iter().cloned().collect())
                }
            }
        }
    }
}
