use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::AppResult,
    extract::ValidatedJson,
    middleware::auth::AdminUser,
    models::{Contact, NewContact},
    response::MessageBody,
    services::contact_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = NewContact,
    responses(
        (status = 201, description = "Message stored", body = Contact),
        (status = 400, description = "Validation failed", body = MessageBody),
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let contact = contact_service::submit_contact(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "All contact messages", body = Vec<Contact>),
        (status = 401, description = "Admin session required", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Contact"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = contact_service::list_contacts(&state, &user).await?;
    Ok(Json(contacts))
}
