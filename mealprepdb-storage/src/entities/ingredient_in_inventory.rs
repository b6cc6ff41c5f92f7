use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A purchased lot of an ingredient. Many lots may reference the same
/// ingredient row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredient_in_inventory")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Ingredient this lot is a purchase of
    pub ingredient_id: i64,

    /// Where it was bought
    pub from_where: Option<String>,

    pub brand: Option<String>,

    pub price: Option<f64>,

    pub quantity: Option<f64>,

    pub unit: Option<String>,

    pub purchased_on: Option<Date>,

    /// Set once the lot is used up
    pub finished_on: Option<Date>,

    /// When the row was last written
    pub updated_on: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient::Column::Id"
    )]
    Ingredient,

    #[sea_orm(has_many = "super::dish_ingredient::Entity")]
    DishIngredients,

    #[sea_orm(has_many = "super::meal_ingredient::Entity")]
    MealIngredients,
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
