use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::admin::AdminStats,
    error::AppResult,
    middleware::auth::AdminUser,
    response::MessageBody,
    routes::media,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/media", get(media::list_media_admin))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard counts", body = AdminStats),
        (status = 401, description = "Admin session required", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<AdminStats>> {
    let stats = admin_service::stats(&state).await?;
    Ok(Json(stats))
}
