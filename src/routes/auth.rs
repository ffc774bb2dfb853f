use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    dto::auth::{CurrentUser, LoginRequest},
    error::AppResult,
    extract::ValidatedJson,
    middleware::auth::{AuthUser, cleared_session_cookie, session_cookie},
    response::{MessageBody, SuccessBody},
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/user", get(current_user))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = CurrentUser),
        (status = 400, description = "Missing username or password", body = MessageBody),
        (status = 401, description = "Invalid credentials", body = MessageBody),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = auth_service::login_user(&state, payload).await?;
    let max_age = auth_service::session_ttl(&state).num_seconds();
    let cookie = session_cookie(&outcome.session_id, max_age, state.config.cookie_secure);
    Ok(([(header::SET_COOKIE, cookie)], Json(outcome.user)))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Session destroyed", body = SuccessBody),
        (status = 401, description = "No active session", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    auth_service::logout_user(&state, &user).await?;
    Ok((
        [(header::SET_COOKIE, cleared_session_cookie())],
        Json(SuccessBody::new("Logged out")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Current user", body = CurrentUser),
        (status = 401, description = "No active session", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Auth"
)]
pub async fn current_user(user: AuthUser) -> Json<CurrentUser> {
    Json(auth_service::current_user(user))
}
