use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    error::AppResult,
    extract::ValidatedJson,
    middleware::auth::AdminUser,
    models::{NewOffer, Offer},
    response::{MessageBody, SuccessBody},
    routes::params::parse_id,
    services::offer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route("/{id}", get(get_offer).put(update_offer).delete(delete_offer))
}

#[utoipa::path(
    get,
    path = "/api/offers",
    responses(
        (status = 200, description = "List offers", body = Vec<Offer>)
    ),
    tag = "Offers"
)]
pub async fn list_offers(State(state): State<AppState>) -> AppResult<Json<Vec<Offer>>> {
    let offers = offer_service::list_offers(&state).await?;
    Ok(Json(offers))
}

#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Get offer", body = Offer),
        (status = 400, description = "Invalid offer ID", body = MessageBody),
        (status = 404, description = "Offer not found", body = MessageBody),
    ),
    tag = "Offers"
)]
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Offer>> {
    let id = parse_id(&id, "offer")?;
    let offer = offer_service::get_offer(&state, id).await?;
    Ok(Json(offer))
}

#[utoipa::path(
    post,
    path = "/api/offers",
    request_body = NewOffer,
    responses(
        (status = 201, description = "Create offer", body = Offer),
        (status = 400, description = "Validation failed", body = MessageBody),
        (status = 401, description = "Admin session required", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Offers"
)]
pub async fn create_offer(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ValidatedJson(payload): ValidatedJson<NewOffer>,
) -> AppResult<(StatusCode, Json<Offer>)> {
    let offer = offer_service::create_offer(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    request_body = NewOffer,
    responses(
        (status = 200, description = "Updated offer", body = Offer),
        (status = 400, description = "Validation failed", body = MessageBody),
        (status = 401, description = "Admin session required", body = MessageBody),
        (status = 404, description = "Offer not found", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Offers"
)]
pub async fn update_offer(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<NewOffer>,
) -> AppResult<Json<Offer>> {
    let id = parse_id(&id, "offer")?;
    let offer = offer_service::update_offer(&state, &user, id, payload).await?;
    Ok(Json(offer))
}

#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Deleted offer", body = SuccessBody),
        (status = 401, description = "Admin session required", body = MessageBody),
        (status = 404, description = "Offer not found", body = MessageBody),
    ),
    security(("session_cookie" = [])),
    tag = "Offers"
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessBody>> {
    let id = parse_id(&id, "offer")?;
    offer_service::delete_offer(&state, &user, id).await?;
    Ok(Json(SuccessBody::new("Offer deleted successfully")))
}
