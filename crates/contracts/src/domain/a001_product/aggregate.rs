use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара: в каталоге встречается и строкой, и числом
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        ProductId::Number(i64::from(value))
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

// ============================================================================
// Product
// ============================================================================

/// Товар каталога в том виде, в каком он лежит в products.json.
///
/// Field names follow the payload (`nom`, `desc`, `tailles`, `videoUrl`).
/// Unknown keys are kept in `extra` so the record is forwarded verbatim
/// in the order message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub nom: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub desc: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub photo: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "videoUrl", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailles: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` в текстовом поле равнозначен пустой строке
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(id: impl Into<ProductId>, nom: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nom: nom.into(),
            desc: String::new(),
            photo: String::new(),
            category: None,
            video_url: None,
            tailles: None,
            extra: Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tailles = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    /// Категория, если она задана и не пустая
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Ссылка на видео, если она задана и не пустая
    pub fn video_url(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// Размеры; пустой список и отсутствие поля равнозначны
    pub fn sizes(&self) -> &[String] {
        self.tailles.as_deref().unwrap_or(&[])
    }
}
