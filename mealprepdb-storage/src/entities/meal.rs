use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A consumed meal.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "meal")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Closed meal-type vocabulary, nullable
    pub r#type: Option<String>,

    pub description: Option<String>,

    pub consumed_on: Date,

    /// When the row was last written
    pub updated_on: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_dish::Entity")]
    MealDishes,

    #[sea_orm(has_many = "super::meal_ingredient::Entity")]
    MealIngredients,
}

impl ActiveModelBehavior for ActiveModel {}
