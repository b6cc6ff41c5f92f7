use crate::entities::{dish, meal, meal_dish};
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, FromQueryResult, Set};
use sea_query::{Alias, Expr, JoinType, Order, Query, SelectStatement};

/// Filter criteria for meal-dish list queries.
///
/// `dish_id` is the implicit parent filter used by the nested
/// `/dish/{id}/meal/` listing. Date filters apply to the joined meal's
/// consumption date.
#[derive(Debug, Clone, Default)]
pub struct MealDishFilters {
    pub dish_id: Option<i64>,
    pub dish_name: Option<String>,
    pub dish_name_contains: Option<String>,
    pub consumed_on: Option<NaiveDate>,
    pub consumed_on_le: Option<NaiveDate>,
    pub consumed_on_ge: Option<NaiveDate>,
}

impl MealDishFilters {
    fn apply(&self, select: &mut SelectStatement) {
        if let Some(dish_id) = self.dish_id {
            select.and_where(Expr::col((meal_dish::Entity, meal_dish::Column::DishId)).eq(dish_id));
        }
        if let Some(dish_name) = &self.dish_name {
            select.and_where(Expr::col((dish::Entity, dish::Column::Name)).eq(dish_name.clone()));
        }
        if let Some(fragment) = &self.dish_name_contains {
            select.and_where(
                Expr::col((dish::Entity, dish::Column::Name)).like(format!("%{}%", fragment)),
            );
        }
        if let Some(consumed_on) = self.consumed_on {
            select.and_where(Expr::col((meal::Entity, meal::Column::ConsumedOn)).eq(consumed_on));
        }
        if let Some(consumed_on_le) = self.consumed_on_le {
            select
                .and_where(Expr::col((meal::Entity, meal::Column::ConsumedOn)).lte(consumed_on_le));
        }
        if let Some(consumed_on_ge) = self.consumed_on_ge {
            select
                .and_where(Expr::col((meal::Entity, meal::Column::ConsumedOn)).gte(consumed_on_ge));
        }
    }
}

/// A meal-dish join row with denormalized meal and dish columns
#[derive(Debug, Clone, FromQueryResult)]
pub struct MealDishRow {
    pub id: i64,
    pub meal_type: Option<String>,
    pub meal_id: i64,
    pub dish_name: String,
    pub dish_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub consumed_on: NaiveDate,
    pub dish_created_on: Option<NaiveDate>,
}

/// Payload for inserting a meal-dish row
#[derive(Debug, Clone)]
pub struct CreateMealDish {
    pub meal_id: i64,
    pub dish_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Payload for a partial meal-dish update
#[derive(Debug, Clone, Default)]
pub struct UpdateMealDish {
    pub meal_id: Option<i64>,
    pub dish_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Repository for meal-dish rows
pub struct MealDishRepository;

impl MealDishRepository {
    fn base_select() -> SelectStatement {
        Query::select()
            .column((meal_dish::Entity, meal_dish::Column::Id))
            .expr_as(
                Expr::col((meal::Entity, meal::Column::Type)),
                Alias::new("meal_type"),
            )
            .column((meal_dish::Entity, meal_dish::Column::MealId))
            .expr_as(
                Expr::col((dish::Entity, dish::Column::Name)),
                Alias::new("dish_name"),
            )
            .column((meal_dish::Entity, meal_dish::Column::DishId))
            .column((meal_dish::Entity, meal_dish::Column::Quantity))
            .column((meal_dish::Entity, meal_dish::Column::Unit))
            .column((meal::Entity, meal::Column::ConsumedOn))
            .expr_as(
                Expr::col((dish::Entity, dish::Column::CreatedOn)),
                Alias::new("dish_created_on"),
            )
            .from(meal_dish::Entity)
            .join(
                JoinType::InnerJoin,
                dish::Entity,
                Expr::col((meal_dish::Entity, meal_dish::Column::DishId))
                    .equals((dish::Entity, dish::Column::Id)),
            )
            .join(
                JoinType::InnerJoin,
                meal::Entity,
                Expr::col((meal_dish::Entity, meal_dish::Column::MealId))
                    .equals((meal::Entity, meal::Column::Id)),
            )
            .order_by((meal_dish::Entity, meal_dish::Column::Id), Order::Asc)
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &MealDishFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<MealDishRow>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> StorageResult<MealDishRow> {
        let select = Self::base_select()
            .and_where(Expr::col((meal_dish::Entity, meal_dish::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateMealDish,
    ) -> StorageResult<MealDishRow> {
        let model = meal_dish::ActiveModel {
            meal_id: Set(form.meal_id),
            dish_id: Set(form.dish_id),
            quantity: Set(form.quantity),
            unit: Set(form.unit),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let inserted = model.insert(conn).await.map_err(StorageError::from_write_err)?;
        Self::find_by_id(conn, inserted.id).await
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i64,
        form: UpdateMealDish,
    ) -> StorageResult<MealDishRow> {
        let mut model = meal_dish::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(meal_id) = form.meal_id {
            model.meal_id = Set(meal_id);
        }
        if let Some(dish_id) = form.dish_id {
            model.dish_id = Set(dish_id);
        }
        if let Some(quantity) = form.quantity {
            model.quantity = Set(Some(quantity));
        }
        if let Some(unit) = form.unit {
            model.unit = Set(Some(unit));
        }

        let updated = model.update(conn).await.map_err(StorageError::from_write_err)?;
        Self::find_by_id(conn, updated.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{create_test_db, seeds};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn test_dish_scoped_listing_with_meal_columns() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let page = MealDishRepository::list(
            db.get_connection(),
            &MealDishFilters {
                dish_id: Some(1),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        let row = &page.items[0];
        assert_eq!(row.dish_name, "mong bean rice");
        assert_eq!(row.meal_type.as_deref(), Some("lunch"));
        assert_eq!(row.consumed_on, date("2017-07-06"));
    }

    #[tokio::test]
    async fn test_consumed_on_filter_applies_to_meal() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let page = MealDishRepository::list(
            db.get_connection(),
            &MealDishFilters {
                consumed_on_le: Some(date("2017-07-05")),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_conflict() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let result = MealDishRepository::create(
            db.get_connection(),
            CreateMealDish {
                meal_id: 1,
                dish_id: 1,
                quantity: None,
                unit: None,
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }
}
