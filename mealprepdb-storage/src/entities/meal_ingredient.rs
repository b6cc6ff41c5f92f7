use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Joins a meal to an inventory lot eaten directly (not through a dish).
/// Unique per (lot, meal) pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meal_ingredient")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    pub meal_id: i64,

    /// References `ingredient_in_inventory.id`
    pub ingredient_id: i64,

    /// How much of the lot went into the meal
    pub quantity: Option<f64>,

    pub unit: Option<String>,

    /// When the row was last written
    pub updated_on: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meal::Entity",
        from = "Column::MealId",
        to = "super::meal::Column::Id"
    )]
    Meal,

    #[sea_orm(
        belongs_to = "super::ingredient_in_inventory::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient_in_inventory::Column::Id"
    )]
    InventoryLot,
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meal.def()
    }
}

impl Related<super::ingredient_in_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryLot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
