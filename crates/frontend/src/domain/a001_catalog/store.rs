use super::error::LoadError;
use crate::shared::collation::locale_compare;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use serde_json::Value;

/// Значение фильтра «без ограничения по категории»
pub const ALL_CATEGORIES: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "Toutes les catégories";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// `"all"` is the sentinel, anything else is taken as a category name
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => product.category.as_deref() == Some(name.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed(LoadError),
}

/// Catalogue state for the session: the product list, the categories
/// derived from it, and the active filter.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<CategoryFilter>,
    active_filter: CategoryFilter,
    status: LoadStatus,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: vec![CategoryFilter::All],
            active_filter: CategoryFilter::All,
            status: LoadStatus::Pending,
        }
    }
}

impl CatalogStore {
    /// Populate the store from the raw payload. On failure the store stays
    /// empty and remembers the error for the grid.
    pub fn load(&mut self, raw: Value) -> Result<(), LoadError> {
        match parse_products(raw) {
            Ok(products) => {
                self.categories = derive_categories(&products);
                self.products = products;
                self.active_filter = CategoryFilter::All;
                self.status = LoadStatus::Loaded;
                log::info!(
                    "Catalogue loaded: {} products, {} categories",
                    self.products.len(),
                    self.categories.len() - 1
                );
                Ok(())
            }
            Err(e) => {
                self.fail(e.clone());
                Err(e)
            }
        }
    }

    pub fn fail(&mut self, error: LoadError) {
        log::error!("Error fetching or parsing the catalogue: {}", error);
        self.products.clear();
        self.categories = vec![CategoryFilter::All];
        self.active_filter = CategoryFilter::All;
        self.status = LoadStatus::Failed(error);
    }

    /// Unknown values are accepted and simply match nothing
    pub fn set_filter(&mut self, value: &str) {
        let filter = CategoryFilter::from_value(value);
        if !self.categories.contains(&filter) {
            log::warn!("Unknown category filter '{}'", value);
        }
        log::debug!("Category filter set to '{}'", filter.value());
        self.active_filter = filter;
    }

    /// Products matching the active filter, in catalogue order
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.active_filter.matches(p))
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.active_filter
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

fn parse_products(raw: Value) -> Result<Vec<Product>, LoadError> {
    if !raw.is_array() {
        return Err(LoadError::MalformedPayload(
            "Le fichier JSON ne contient pas un tableau valide.".to_string(),
        ));
    }
    serde_json::from_value(raw)
        .map_err(|e| LoadError::MalformedPayload(format!("Produit invalide : {}", e)))
}

/// "all" first, then every distinct non-empty category in locale order
pub fn derive_categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut names: Vec<&str> = products.iter().filter_map(Product::category).collect();
    names.sort_by(|a, b| locale_compare(a, b));
    names.dedup();

    std::iter::once(CategoryFilter::All)
        .chain(names.into_iter().map(|n| CategoryFilter::Category(n.to_string())))
        .collect()
}

pub fn create_store() -> RwSignal<CatalogStore> {
    RwSignal::new(CatalogStore::default())
}
