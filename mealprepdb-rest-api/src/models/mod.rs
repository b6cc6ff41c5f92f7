//! Request and response models for every resource.
//!
//! List parameter structs carry `offset`/`limit` directly rather than
//! through `#[serde(flatten)]`: the query-string deserializer cannot route
//! numbers through flattened structs.

pub mod dish_ingredients;
pub mod dishes;
pub mod ingredients;
pub mod inventory;
pub mod meal_dishes;
pub mod meal_ingredients;
pub mod meals;

pub use dish_ingredients::{
    CreateDishIngredientRequest, DishIngredientListParams, DishIngredientResource,
    UpdateDishIngredientRequest,
};
pub use dishes::{CreateDishRequest, DishListParams, DishResource, UpdateDishRequest};
pub use ingredients::{
    CreateIngredientRequest, IngredientListParams, IngredientResource, UpdateIngredientRequest,
};
pub use inventory::{
    CreateInventoryLotRequest, InventoryListParams, InventoryLotResource,
    UpdateInventoryLotRequest,
};
pub use meal_dishes::{
    CreateMealDishRequest, MealDishListParams, MealDishResource, UpdateMealDishRequest,
};
pub use meal_ingredients::{
    CreateMealIngredientRequest, MealIngredientListParams, MealIngredientResource,
    UpdateMealIngredientRequest,
};
pub use meals::{CreateMealRequest, MealListParams, MealResource, UpdateMealRequest};
