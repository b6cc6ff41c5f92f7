use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A prepared dish. Dishes compose: a dish may point at the parent dish it
/// was derived from.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "dish")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    /// Optional self-reference for composed dishes
    pub parent_dish_id: Option<i64>,

    pub created_on: Option<Date>,

    /// When the row was last written
    pub updated_on: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentDishId",
        to = "Column::Id"
    )]
    ParentDish,

    #[sea_orm(has_many = "super::dish_ingredient::Entity")]
    DishIngredients,

    #[sea_orm(has_many = "super::meal_dish::Entity")]
    MealDishes,
}

impl ActiveModelBehavior for ActiveModel {}
