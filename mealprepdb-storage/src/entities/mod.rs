//! Sea-ORM entities for the mealprepdb schema

pub mod dish;
pub mod dish_ingredient;
pub mod ingredient;
pub mod ingredient_in_inventory;
pub mod meal;
pub mod meal_dish;
pub mod meal_ingredient;

pub use dish::{
    ActiveModel as DishActiveModel, Entity as Dishes, Model as Dish,
};
pub use dish_ingredient::{
    ActiveModel as DishIngredientActiveModel, Entity as DishIngredients, Model as DishIngredient,
};
pub use ingredient::{
    ActiveModel as IngredientActiveModel, Entity as Ingredients, Model as Ingredient,
};
pub use ingredient_in_inventory::{
    ActiveModel as InventoryActiveModel, Entity as InventoryLots, Model as InventoryLot,
};
pub use meal::{ActiveModel as MealActiveModel, Entity as Meals, Model as Meal};
pub use meal_dish::{
    ActiveModel as MealDishActiveModel, Entity as MealDishes, Model as MealDish,
};
pub use meal_ingredient::{
    ActiveModel as MealIngredientActiveModel, Entity as MealIngredients, Model as MealIngredient,
};
