use chrono::Duration;
use uuid::Uuid;

use crate::{
    dto::auth::{CurrentUser, LoginRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    password::verify_password,
    storage::SessionData,
    state::AppState,
};

/// A freshly opened session.
#[derive(Debug)]
pub struct LoginOutcome {
    pub session_id: String,
    pub user: CurrentUser,
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginOutcome> {
    let LoginRequest { username, password } = payload;

    let user = match state.storage.get_user_by_username(&username).await? {
        Some(u) => u,
        None => return Err(AppError::InvalidCredentials),
    };

    if !verify_password(&password, &user.password)? {
        return Err(AppError::InvalidCredentials);
    }

    let session_id = Uuid::new_v4().simple().to_string();
    state
        .sessions
        .set(
            &session_id,
            SessionData { user_id: user.id },
            session_ttl(state),
        )
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(LoginOutcome {
        session_id,
        user: user.into(),
    })
}

pub async fn logout_user(state: &AppState, user: &AuthUser) -> AppResult<()> {
    state.sessions.destroy(&user.session_id).await?;
    tracing::info!(user_id = user.user_id, "user logged out");
    Ok(())
}

pub fn current_user(user: AuthUser) -> CurrentUser {
    CurrentUser {
        id: user.user_id,
        username: user.username,
        is_admin: user.is_admin,
    }
}

pub fn session_ttl(state: &AppState) -> Duration {
    Duration::hours(state.config.session_ttl_hours)
}
