use crate::{
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Contact, NewContact},
    state::AppState,
};

/// Every submission is stored as sent; identical messages are not merged.
pub async fn submit_contact(state: &AppState, payload: NewContact) -> AppResult<Contact> {
    let contact = state.storage.create_contact(payload).await?;
    tracing::info!(contact_id = contact.id, "contact message received");
    Ok(contact)
}

pub async fn list_contacts(state: &AppState, user: &AuthUser) -> AppResult<Vec<Contact>> {
    let contacts = state.storage.get_all_contacts().await?;
    tracing::debug!(admin = %user.username, count = contacts.len(), "listed contact messages");
    Ok(contacts)
}
