//! Content model for catalog documents as delivered by the content store.
//!
//! Field names follow the store's JSON (`_id`, `_createdAt`, camelCase). Fields the
//! store may omit or send as `null` decode to their neutral value so that every
//! downstream computation stays total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use pearion_core::{CategoryId, Entity, ProductId, ValueObject};

/// Decode `null` and missing values as `T::default()`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Promotion status of a product: drives badges and catalog sort modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Promotion {
    #[default]
    None,
    New,
    Bestseller,
    Featured,
    Limited,
    Clearance,
}

impl Promotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Promotion::None => "none",
            Promotion::New => "new",
            Promotion::Bestseller => "bestseller",
            Promotion::Featured => "featured",
            Promotion::Limited => "limited",
            Promotion::Clearance => "clearance",
        }
    }

    /// Display label for product cards (`None` carries no badge).
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Promotion::None => None,
            Promotion::New => Some("New"),
            Promotion::Bestseller => Some("Bestseller"),
            Promotion::Featured => Some("Featured"),
            Promotion::Limited => Some("Limited"),
            Promotion::Clearance => Some("Clearance"),
        }
    }
}

impl core::str::FromStr for Promotion {
    type Err = pearion_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Promotion::None),
            "new" => Ok(Promotion::New),
            "bestseller" => Ok(Promotion::Bestseller),
            "featured" => Ok(Promotion::Featured),
            "limited" => Ok(Promotion::Limited),
            "clearance" => Ok(Promotion::Clearance),
            other => Err(pearion_core::DomainError::validation(format!(
                "unknown promotion: {other}"
            ))),
        }
    }
}

/// URL slug (`{ "current": "pearl-drop-earrings" }`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default, deserialize_with = "nullable")]
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }
}

impl ValueObject for Slug {}

/// Uploaded asset behind an image (either expanded or a bare reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_id", alias = "_ref", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Image reference attached to a product or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(rename = "_key", default)]
    pub key: Option<String>,
    #[serde(default)]
    pub asset: Option<ImageAsset>,
    #[serde(default, deserialize_with = "nullable")]
    pub alt: String,
}

impl ImageRef {
    pub fn url(&self) -> Option<&str> {
        self.asset.as_ref().and_then(|a| a.url.as_deref())
    }
}

impl ValueObject for ImageRef {}

/// Category as embedded in a product projection (`category->{_id, title}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id", alias = "_ref")]
    pub id: CategoryId,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
}

/// Category document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    /// Display order; lower shows first.
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

impl Category {
    /// Ordering used by category strips: display order ascending (unset last),
    /// then title.
    pub fn display_cmp(&self, other: &Self) -> core::cmp::Ordering {
        let key = |c: &Category| (c.order.is_none(), c.order.unwrap_or_default());
        key(self)
            .cmp(&key(other))
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Product document (read-only snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    /// Price in PKR; fractional amounts are valid content.
    #[serde(default, deserialize_with = "nullable")]
    pub price: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub size: String,
    /// Possibly composite, e.g. `"Gold / Silver"`.
    #[serde(default, deserialize_with = "nullable")]
    pub material: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default, deserialize_with = "nullable")]
    pub promotion: Promotion,
    #[serde(default, deserialize_with = "nullable")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub occasions: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub care_instructions: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub slug: Option<Slug>,
}

impl Product {
    /// Minimal product with every optional field neutral.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            created_at: None,
            name: name.into(),
            description: String::new(),
            price,
            size: String::new(),
            material: String::new(),
            category: None,
            promotion: Promotion::None,
            colors: Vec::new(),
            occasions: Vec::new(),
            tags: Vec::new(),
            care_instructions: Vec::new(),
            images: Vec::new(),
            slug: None,
        }
    }

    pub fn category_title(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.title.as_str())
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category.as_ref().map(|c| &c.id)
    }

    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().map(Slug::as_str)
    }

    /// Individual materials of a composite `material` value (`"Gold / Silver"`).
    pub fn materials(&self) -> impl Iterator<Item = &str> {
        self.material
            .split('/')
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    pub fn primary_image(&self) -> Option<&ImageRef> {
        self.images.first()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
