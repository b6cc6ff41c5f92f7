use crate::entities::{ingredient, ingredient_in_inventory as inventory, meal, meal_ingredient};
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, FromQueryResult, Set};
use sea_query::{Alias, Expr, JoinType, Order, Query, SelectStatement};

/// Filter criteria for meal-ingredient list queries.
///
/// `ingredient_id` is the implicit parent filter used by the nested
/// `/ingredient_in_inventory/{id}/meal/` listing; it matches the inventory
/// lot the meal consumed. Date filters apply to the joined meal's
/// consumption date.
#[derive(Debug, Clone, Default)]
pub struct MealIngredientFilters {
    pub ingredient_id: Option<i64>,
    pub ingredient_name: Option<String>,
    pub ingredient_name_contains: Option<String>,
    pub consumed_on: Option<NaiveDate>,
    pub consumed_on_le: Option<NaiveDate>,
    pub consumed_on_ge: Option<NaiveDate>,
}

impl MealIngredientFilters {
    fn apply(&self, select: &mut SelectStatement) {
        if let Some(ingredient_id) = self.ingredient_id {
            select.and_where(
                Expr::col((meal_ingredient::Entity, meal_ingredient::Column::IngredientId))
                    .eq(ingredient_id),
            );
        }
        if let Some(name) = &self.ingredient_name {
            select.and_where(
                Expr::col((ingredient::Entity, ingredient::Column::Name)).eq(name.clone()),
            );
        }
        if let Some(fragment) = &self.ingredient_name_contains {
            select.and_where(
                Expr::col((ingredient::Entity, ingredient::Column::Name))
                    .like(format!("%{}%", fragment)),
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

/// A meal-ingredient join row with denormalized meal and ingredient columns
#[derive(Debug, Clone, FromQueryResult)]
pub struct MealIngredientRow {
    pub id: i64,
    pub meal_type: Option<String>,
    pub meal_id: i64,
    pub ingredient_name: String,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub consumed_on: NaiveDate,
}

/// Payload for inserting a meal-ingredient row
#[derive(Debug, Clone)]
pub struct CreateMealIngredient {
    pub meal_id: i64,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Payload for a partial meal-ingredient update
#[derive(Debug, Clone, Default)]
pub struct UpdateMealIngredient {
    pub meal_id: Option<i64>,
    pub ingredient_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Repository for meal-ingredient rows
pub struct MealIngredientRepository;

impl MealIngredientRepository {
    /// Join chain: meal_ingredient → inventory lot → ingredient for the
    /// name, and meal_ingredient → meal for type and consumption date.
    fn base_select() -> SelectStatement {
        Query::select()
            .column((meal_ingredient::Entity, meal_ingredient::Column::Id))
            .expr_as(
                Expr::col((meal::Entity, meal::Column::Type)),
                Alias::new("meal_type"),
            )
            .column((meal_ingredient::Entity, meal_ingredient::Column::MealId))
            .expr_as(
                Expr::col((ingredient::Entity, ingredient::Column::Name)),
                Alias::new("ingredient_name"),
            )
            .column((meal_ingredient::Entity, meal_ingredient::Column::IngredientId))
            .column((meal_ingredient::Entity, meal_ingredient::Column::Quantity))
            .column((meal_ingredient::Entity, meal_ingredient::Column::Unit))
            .column((meal::Entity, meal::Column::ConsumedOn))
            .from(meal_ingredient::Entity)
            .join(
                JoinType::InnerJoin,
                inventory::Entity,
                Expr::col((meal_ingredient::Entity, meal_ingredient::Column::IngredientId))
                    .equals((inventory::Entity, inventory::Column::Id)),
            )
            .join(
                JoinType::InnerJoin,
                ingredient::Entity,
                Expr::col((ingredient::Entity, ingredient::Column::Id))
                    .equals((inventory::Entity, inventory::Column::IngredientId)),
            )
            .join(
                JoinType::InnerJoin,
                meal::Entity,
                Expr::col((meal_ingredient::Entity, meal_ingredient::Column::MealId))
                    .equals((meal::Entity, meal::Column::Id)),
            )
            .order_by(
                (meal_ingredient::Entity, meal_ingredient::Column::Id),
                Order::Asc,
            )
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &MealIngredientFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<MealIngredientRow>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: i64,
    ) -> StorageResult<MealIngredientRow> {
        let select = Self::base_select()
            .and_where(Expr::col((meal_ingredient::Entity, meal_ingredient::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateMealIngredient,
    ) -> StorageResult<MealIngredientRow> {
        let model = meal_ingredient::ActiveModel {
            meal_id: Set(form.meal_id),
            ingredient_id: Set(form.ingredient_id),
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
        form: UpdateMealIngredient,
    ) -> StorageResult<MealIngredientRow> {
        let mut model = meal_ingredient::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(meal_id) = form.meal_id {
            model.meal_id = Set(meal_id);
        }
        if let Some(ingredient_id) = form.ingredient_id {
            model.ingredient_id = Set(ingredient_id);
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

    #[tokio::test]
    async fn test_lot_scoped_listing_resolves_reference_name() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        // seed meal 1 ate from lot 2, an onion purchase
        let page = MealIngredientRepository::list(
            db.get_connection(),
            &MealIngredientFilters {
                ingredient_id: Some(2),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        let row = &page.items[0];
        assert_eq!(row.ingredient_name, "onion");
        assert_eq!(row.meal_type.as_deref(), Some("lunch"));
    }

    #[tokio::test]
    async fn test_ingredient_name_filter() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let page = MealIngredientRepository::list(
            db.get_connection(),
            &MealIngredientFilters {
                ingredient_name: Some("rice".to_string()),
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

        let result = MealIngredientRepository::create(
            db.get_connection(),
            CreateMealIngredient {
                meal_id: 1,
                ingredient_id: 2,
                quantity: None,
                unit: None,
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }
}
