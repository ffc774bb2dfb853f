use axum::{
    Json, Router,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    models::Media,
    response::{MessageBody, SuccessBody},
    routes::params::parse_id,
    services::media_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_media).post(upload_media))
        .route("/{id}", delete(delete_media))
}

#[utoipa::path(
    get,
    path = "/api/media",
    responses(
        (status = 200, description = "List media files", body = Vec<Media>)
    ),
    tag = "Media"
)]
pub async fn list_media(State(state): State<AppState>) -> AppResult<Json<Vec<Media>>> {
    let media = media_service::list_media(&state).await?;
    Ok(Json(media))
}

#[utoipa::path(
    get,
    path = "/api/admin/media",
    responses(
        (status = 200, description = "List media files (admin view)", body = Vec<Media>),
        (status = 401, description = "Admin session required", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn list_media_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<Media>>> {
    let media = media_service::list_media(&state).await?;
    Ok(Json(media))
}

#[utoipa::path(
    post,
    path = "/api/media",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "`file` part with the upload, optional `name` part with a display name"
    ),
    responses(
        (status = 201, description = "Uploaded media", body = Media),
        (status = 400, description = "No file uploaded or malformed form", body = MessageBody),
        (status = 401, description = "Admin session required", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Media"
)]
pub async fn upload_media(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<Media>)> {
    let multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let form = media_service::read_upload_form(multipart).await?;
    let media = media_service::upload_media(&state, &user, form).await?;
    Ok((StatusCode::CREATED, Json(media)))
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    params(
        ("id" = i32, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Deleted media and its file", body = SuccessBody),
        (status = 401, description = "Admin session required", body = MessageBody),
        (status = 404, description = "Media not found", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Media"
)]
pub async fn delete_media(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody>> {
    let id = parse_id(&id, "media")?;
    media_service::delete_media(&state, &user, id).await?;
    Ok(Json(SuccessBody::new("Media deleted successfully")))
}
