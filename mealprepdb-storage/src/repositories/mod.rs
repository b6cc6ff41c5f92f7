//! One repository per resource.
//!
//! Repository operations are associated functions taking any
//! [`sea_orm::ConnectionTrait`] implementor, so handlers can run them
//! against the per-request transaction and tests against a pool.

pub mod dish_ingredient_repository;
pub mod dish_repository;
pub mod ingredient_repository;
pub mod inventory_repository;
pub mod meal_dish_repository;
pub mod meal_ingredient_repository;
pub mod meal_repository;

pub use dish_ingredient_repository::{
    CreateDishIngredient, DishIngredientFilters, DishIngredientRepository, DishIngredientRow,
    UpdateDishIngredient,
};
pub use dish_repository::{CreateDish, DishFilters, DishRepository, UpdateDish};
pub use ingredient_repository::{
    CreateIngredient, IngredientFilters, IngredientRepository, UpdateIngredient,
};
pub use inventory_repository::{
    CreateInventoryLot, InventoryFilters, InventoryLotRow, InventoryRepository, UpdateInventoryLot,
};
pub use meal_dish_repository::{
    CreateMealDish, MealDishFilters, MealDishRepository, MealDishRow, UpdateMealDish,
};
pub use meal_ingredient_repository::{
    CreateMealIngredient, MealIngredientFilters, MealIngredientRepository, MealIngredientRow,
    UpdateMealIngredient,
};
pub use meal_repository::{CreateMeal, MealFilters, MealRepository, UpdateMeal};
