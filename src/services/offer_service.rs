use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{NewOffer, Offer},
    state::AppState,
};

pub async fn list_offers(state: &AppState) -> AppResult<Vec<Offer>> {
    state.storage.get_all_offers().await
}

pub async fn get_offer(state: &AppState, id: i32) -> AppResult<Offer> {
    state
        .storage
        .get_offer(id)
        .await?
        .ok_or(AppError::NotFound("Offer"))
}

pub async fn create_offer(state: &AppState, user: &AuthUser, payload: NewOffer) -> AppResult<Offer> {
    let offer = state.storage.create_offer(payload).await?;
    tracing::info!(admin = %user.username, offer_id = offer.id, "offer created");
    Ok(offer)
}

pub async fn update_offer(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: NewOffer,
) -> AppResult<Offer> {
    let offer = state
        .storage
        .update_offer(id, payload)
        .await?
        .ok_or(AppError::NotFound("Offer"))?;
    tracing::info!(admin = %user.username, offer_id = id, "offer updated");
    Ok(offer)
}

pub async fn delete_offer(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    if state.storage.get_offer(id).await?.is_none() {
        return Err(AppError::NotFound("Offer"));
    }
    if !state.storage.delete_offer(id).await? {
        return Err(AppError::Internal(anyhow::anyhow!(
            "offer {id} passed the existence check but was not deleted"
        )));
    }
    tracing::info!(admin = %user.username, offer_id = id, "offer deleted");
    Ok(())
}
