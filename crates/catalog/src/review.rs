//! Customer reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pearion_core::{DomainError, DomainResult, Entity, ProductId, ReviewId};

use crate::product::nullable;

pub const MAX_REVIEWER_NAME_CHARS: usize = 50;
pub const MAX_REVIEW_TEXT_CHARS: usize = 500;

/// Reference from a review to the reviewed product (`{ "_ref": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_ref")]
    pub id: ProductId,
}

/// Review document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ReviewId,
    #[serde(rename = "_createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Reviewer name.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    /// Stars, 1 to 5.
    #[serde(default, deserialize_with = "nullable")]
    pub rating: u8,
    #[serde(default)]
    pub product: Option<ProductRef>,
}

impl Review {
    pub fn product_id(&self) -> Option<&ProductId> {
        self.product.as_ref().map(|r| &r.id)
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Unvalidated review input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub name: String,
    pub text: String,
    pub rating: i64,
    pub product: Option<ProductId>,
}

impl ReviewDraft {
    pub fn validate(self, id: ReviewId, created_at: DateTime<Utc>) -> DomainResult<Review> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("reviewer name is required"));
        }
        if name.chars().count() > MAX_REVIEWER_NAME_CHARS {
            return Err(DomainError::validation(format!(
                "reviewer name exceeds {MAX_REVIEWER_NAME_CHARS} characters"
            )));
        }

        let text = self.text.trim();
        if text.is_empty() {
            return Err(DomainError::validation("review text is required"));
        }
        if text.chars().count() > MAX_REVIEW_TEXT_CHARS {
            return Err(DomainError::validation(format!(
                "review text exceeds {MAX_REVIEW_TEXT_CHARS} characters"
            )));
        }

        let rating = u8::try_from(self.rating)
            .ok()
            .filter(|r| (1..=5).contains(r))
            .ok_or_else(|| DomainError::validation("rating must be between 1 and 5"))?;

        Ok(Review {
            id,
            created_at: Some(created_at),
            name: name.to_string(),
            text: text.to_string(),
            rating,
            product: self.product.map(|id| ProductRef { id }),
        })
    }
}

/// Reviews of one product, newest first.
pub fn reviews_for_product<'a, I>(reviews: I, product_id: &ProductId) -> Vec<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut matching: Vec<&'a Review> = reviews
        .into_iter()
        .filter(|r| r.product_id() == Some(product_id))
        .collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matching
}

/// Mean star rating; `None` without reviews.
pub fn average_rating<'a, I>(reviews: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Review>,
{
    let (sum, count) = reviews
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r.rating), count + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}
