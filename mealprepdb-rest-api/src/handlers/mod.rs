//! Endpoint handlers.
//!
//! Every handler begins one transaction on the pool, runs its storage
//! operations against it, and commits on the success path; an early error
//! return drops the transaction, rolling it back.

pub mod dish_ingredients;
pub mod dishes;
pub mod health;
pub mod ingredients;
pub mod inventory;
pub mod meal_dishes;
pub mod meal_ingredients;
pub mod meals;

pub use dish_ingredients::*;
pub use dishes::*;
pub use health::*;
pub use ingredients::*;
pub use inventory::*;
pub use meal_dishes::*;
pub use meal_ingredients::*;
pub use meals::*;
