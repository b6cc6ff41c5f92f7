//! Test helpers: in-memory database bootstrap and seed data.
//!
//! Seed rows mirror a small kitchen: four ingredients, four purchased lots,
//! two composed dishes and one consumed meal. Ids are deterministic because
//! every test starts from a fresh database (1-based, insert order).

use crate::config::DatabaseConfig;
use crate::connection::DatabaseConnection;

/// Create a migrated in-memory database.
pub async fn create_test_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };

    let db = DatabaseConnection::new(config).await.expect("test database");
    db.migrate().await.expect("test migrations");
    db
}

pub mod seeds {
    use crate::repositories::{
        CreateDish, CreateDishIngredient, CreateIngredient, CreateInventoryLot, CreateMeal,
        CreateMealDish, CreateMealIngredient, DishIngredientRepository, DishRepository,
        IngredientRepository, InventoryRepository, MealDishRepository, MealIngredientRepository,
        MealRepository,
    };
    use chrono::NaiveDate;
    use sea_orm::ConnectionTrait;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("seed date")
    }

    /// Ingredients 1..=4: onion, rice, cumin, mong beans.
    pub async fn ingredients<C: ConnectionTrait>(conn: &C) {
        for (name, r#type) in [
            ("onion", Some("base_vegetable")),
            ("rice", Some("starch")),
            ("cumin", Some("spice")),
            ("mong beans", Some("legumes")),
        ] {
            IngredientRepository::create(
                conn,
                CreateIngredient {
                    name: name.to_string(),
                    r#type: r#type.map(str::to_string),
                },
            )
            .await
            .expect("seed ingredient");
        }
    }

    /// Lots 1..=4: two onion purchases (2017-07-01, 2017-07-05), one rice
    /// (2017-06-01), one mong beans (2017-06-20).
    pub async fn inventory<C: ConnectionTrait>(conn: &C) {
        let lots = [
            (1, "onion ville", "", Some(3.5), Some(1.5), "pound", "2017-07-01", Some("2017-07-01")),
            (1, "leek ville", "", Some(2.0), Some(1.0), "pound", "2017-07-05", Some("2017-07-05")),
            (2, "onion ville", "buen arroz", Some(23.99), Some(20.0), "pound", "2017-06-01", None),
            (4, "onion ville", "good beans", Some(2.99), Some(1.0), "pound", "2017-06-20", None),
        ];
        for (ingredient_id, from_where, brand, price, quantity, unit, purchased, finished) in lots {
            InventoryRepository::create(
                conn,
                CreateInventoryLot {
                    ingredient_id,
                    from_where: Some(from_where.to_string()),
                    brand: Some(brand.to_string()),
                    price,
                    quantity,
                    unit: Some(unit.to_string()),
                    purchased_on: Some(date(purchased)),
                    finished_on: finished.map(date),
                },
            )
            .await
            .expect("seed lot");
        }
    }

    /// Dishes 1..=2; dish 2 composes dish 1.
    pub async fn dishes<C: ConnectionTrait>(conn: &C) {
        DishRepository::create(
            conn,
            CreateDish {
                name: "mong bean rice".to_string(),
                parent_dish_id: None,
                created_on: Some(date("2017-07-02")),
            },
        )
        .await
        .expect("seed dish");

        DishRepository::create(
            conn,
            CreateDish {
                name: "fried mong bean rice".to_string(),
                parent_dish_id: Some(1),
                created_on: Some(date("2017-07-04")),
            },
        )
        .await
        .expect("seed dish");
    }

    /// Dish 1 uses lots 1 (onion), 3 (rice) and 4 (mong beans).
    pub async fn dish_ingredients<C: ConnectionTrait>(conn: &C) {
        for (dish_id, ingredient_id, quantity, unit) in [
            (1, 1, Some(0.5), "pound"),
            (1, 3, Some(2.0), "cup"),
            (1, 4, Some(1.0), "cup"),
        ] {
            DishIngredientRepository::create(
                conn,
                CreateDishIngredient {
                    dish_id,
                    ingredient_id,
                    quantity,
                    unit: Some(unit.to_string()),
                },
            )
            .await
            .expect("seed dish ingredient");
        }
    }

    /// Meal 1: lunch on 2017-07-06 made of dish 1 plus onion straight from
    /// lot 2.
    pub async fn meals<C: ConnectionTrait>(conn: &C) {
        MealRepository::create(
            conn,
            CreateMeal {
                r#type: Some("lunch".to_string()),
                description: "mong bean rice lunch".to_string(),
                consumed_on: date("2017-07-06"),
            },
        )
        .await
        .expect("seed meal");

        MealDishRepository::create(
            conn,
            CreateMealDish {
                meal_id: 1,
                dish_id: 1,
                quantity: Some(1.0),
                unit: Some("serving".to_string()),
            },
        )
        .await
        .expect("seed meal dish");

        MealIngredientRepository::create(
            conn,
            CreateMealIngredient {
                meal_id: 1,
                ingredient_id: 2,
                quantity: Some(0.25),
                unit: Some("pound".to_string()),
            },
        )
        .await
        .expect("seed meal ingredient");
    }

    /// Load every fixture in foreign-key order.
    pub async fn all<C: ConnectionTrait>(conn: &C) {
        ingredients(conn).await;
        inventory(conn).await;
        dishes(conn).await;
        dish_ingredients(conn).await;
        meals(conn).await;
    }
}
