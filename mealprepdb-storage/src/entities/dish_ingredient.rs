use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Joins a dish to the inventory lot it was cooked from. Unique per
/// (dish, lot) pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dish_ingredient")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    pub dish_id: i64,

    /// References `ingredient_in_inventory.id` (a lot, not the reference
    /// ingredient row)
    pub ingredient_id: i64,

    pub quantity: Option<f64>,

    pub unit: Option<String>,

    /// When the row was last written
    pub updated_on: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dish::Entity",
        from = "Column::DishId",
        to = "super::dish::Column::Id"
    )]
    Dish,

    #[sea_orm(
        belongs_to = "super::ingredient_in_inventory::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient_in_inventory::Column::Id"
    )]
    InventoryLot,
}

impl Related<super::dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dish.def()
    }
}

impl Related<super::ingredient_in_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryLot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
