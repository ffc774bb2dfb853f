use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub product_count: usize,
    pub category_count: usize,
    pub offer_count: usize,
    pub message_count: usize,
    pub media_count: usize,
}
