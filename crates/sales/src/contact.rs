//! Contact-us messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pearion_core::{ContactId, DomainError, DomainResult, Entity};

use crate::validate::{bounded, email};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactSubject {
    OrderInquiry,
    ProductQuestion,
    ReturnsExchange,
    Other,
}

impl ContactSubject {
    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::OrderInquiry => "Order Inquiry",
            ContactSubject::ProductQuestion => "Product Question",
            ContactSubject::ReturnsExchange => "Returns & Exchange",
            ContactSubject::Other => "Other",
        }
    }
}

/// Contact form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub subject: Option<ContactSubject>,
    #[serde(default)]
    pub message: String,
}

/// Validated contact message document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub subject: ContactSubject,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactForm {
    pub fn validate(self, id: ContactId, received_at: DateTime<Utc>) -> DomainResult<ContactMessage> {
        let name = bounded("name", &self.name, 2, 100)?;
        let email = email(&self.email)?;
        let phone = bounded("phone", &self.phone, 7, 20)?;
        let country = bounded("country", &self.country, 2, 100)?;
        let subject = self
            .subject
            .ok_or_else(|| DomainError::validation("subject is required"))?;
        let message = bounded("message", &self.message, 10, 1000)?;

        Ok(ContactMessage {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            country: country.to_string(),
            subject,
            message: message.to_string(),
            created_at: received_at,
        })
    }
}

impl Entity for ContactMessage {
    type Id = ContactId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
