use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub price: Option<i64>,
    pub discounted_price: Option<i64>,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

// Categories are free text on the row, not a foreign key.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
