use crate::{
    dto::products::ProductQuery,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{NewProduct, Product},
    state::AppState,
};

pub async fn list_products(state: &AppState, query: &ProductQuery) -> AppResult<Vec<Product>> {
    if let Some(category) = query.category() {
        state.storage.get_products_by_category(category).await
    } else if query.featured_only() {
        state.storage.get_featured_products().await
    } else {
        state.storage.get_all_products().await
    }
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    state
        .storage
        .get_product(id)
        .await?
        .ok_or(AppError::NotFound("Product"))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: NewProduct,
) -> AppResult<Product> {
    let product = state.storage.create_product(payload).await?;
    tracing::info!(admin = %user.username, product_id = product.id, "product created");
    Ok(product)
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: i32,
    payload: NewProduct,
) -> AppResult<Product> {
    let product = state
        .storage
        .update_product(id, payload)
        .await?
        .ok_or(AppError::NotFound("Product"))?;
    tracing::info!(admin = %user.username, product_id = id, "product updated");
    Ok(product)
}

pub async fn delete_product(state: &AppState, user: &AuthUser, id: i32) -> AppResult<()> {
    if state.storage.get_product(id).await?.is_none() {
        return Err(AppError::NotFound("Product"));
    }
    if !state.storage.delete_product(id).await? {
        return Err(AppError::Internal(anyhow::anyhow!(
            "product {id} passed the existence check but was not deleted"
        )));
    }
    tracing::info!(admin = %user.username, product_id = id, "product deleted");
    Ok(())
}

pub async fn list_categories(state: &AppState) -> AppResult<Vec<String>> {
    state.storage.get_categories().await
}
