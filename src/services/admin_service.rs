use crate::{dto::admin::AdminStats, error::AppResult, state::AppState};

/// Counts are the lengths of the full listings at call time.
pub async fn stats(state: &AppState) -> AppResult<AdminStats> {
    let storage = &state.storage;
    let products = storage.get_all_products().await?;
    let categories = storage.get_categories().await?;
    let offers = storage.get_all_offers().await?;
    let contacts = storage.get_all_contacts().await?;
    let media = storage.get_all_media().await?;

    Ok(AdminStats {
        product_count: products.len(),
        category_count: categories.len(),
        offer_count: offers.len(),
        message_count: contacts.len(),
        media_count: media.len(),
    })
}
