//! Contact form handling
//!
//! Messages are acknowledged and logged; nothing is stored or forwarded.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::ContactForm;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;

/// Acknowledgement returned to the contact view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, form: ContactForm) -> AppResult<ContactReceipt> {
        form.validate()?;

        let receipt = ContactReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            message: "Thank you! We'll get back to you soon.".to_string(),
        };

        tracing::info!(
            contact_id = %receipt.id,
            name = %form.name,
            email = %form.email,
            length = form.message.len(),
            "Contact message received"
        );

        Ok(receipt)
    }
}
