use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A reference row naming an ingredient; purchases of it live in
/// `ingredient_in_inventory`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredient")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Ingredient name, unique across the table
    #[sea_orm(unique)]
    pub name: String,

    /// Closed ingredient-type vocabulary, nullable
    pub r#type: Option<String>,

    /// When the row was last written
    pub updated_on: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ingredient_in_inventory::Entity")]
    InventoryLots,
}

impl Related<super::ingredient_in_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryLots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
