//! HTTP handler for the contact view

use axum::Json;
use shared::ContactForm;

use crate::error::AppResult;
use crate::services::contact::{ContactReceipt, ContactService};

pub async fn submit_contact(Json(form): Json<ContactForm>) -> AppResult<Json<ContactReceipt>> {
    let receipt = ContactService::new().submit(form)?;
    Ok(Json(receipt))
}
