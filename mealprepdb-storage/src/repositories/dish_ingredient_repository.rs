use crate::entities::{dish, dish_ingredient, ingredient, ingredient_in_inventory as inventory};
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, FromQueryResult, Set};
use sea_query::{Alias, Expr, JoinType, Order, Query, SelectStatement};

/// Filter criteria for dish-ingredient list queries.
///
/// `dish_id` is the implicit parent filter used by the nested
/// `/dish/{id}/ingredient/` listing.
#[derive(Debug, Clone, Default)]
pub struct DishIngredientFilters {
    pub dish_id: Option<i64>,
    pub ingredient_name: Option<String>,
    pub ingredient_name_contains: Option<String>,
}

impl DishIngredientFilters {
    fn apply(&self, select: &mut SelectStatement) {
        if let Some(dish_id) = self.dish_id {
            select.and_where(
                Expr::col((dish_ingredient::Entity, dish_ingredient::Column::DishId)).eq(dish_id),
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
    }
}

/// A dish-ingredient join row with denormalized names
#[derive(Debug, Clone, FromQueryResult)]
pub struct DishIngredientRow {
    pub id: i64,
    pub dish_id: i64,
    pub dish_name: String,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    /// The dish's creation date
    pub used_on: Option<NaiveDate>,
}

/// Payload for inserting a dish-ingredient row
#[derive(Debug, Clone)]
pub struct CreateDishIngredient {
    pub dish_id: i64,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Payload for a partial dish-ingredient update
#[derive(Debug, Clone, Default)]
pub struct UpdateDishIngredient {
    pub dish_id: Option<i64>,
    pub ingredient_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Repository for dish-ingredient rows
pub struct DishIngredientRepository;

impl DishIngredientRepository {
    /// Join chain: dish_ingredient → dish, and dish_ingredient →
    /// inventory lot → ingredient for the ingredient name.
    fn base_select() -> SelectStatement {
        Query::select()
            .column((dish_ingredient::Entity, dish_ingredient::Column::Id))
            .column((dish_ingredient::Entity, dish_ingredient::Column::DishId))
            .expr_as(
                Expr::col((dish::Entity, dish::Column::Name)),
                Alias::new("dish_name"),
            )
            .column((dish_ingredient::Entity, dish_ingredient::Column::IngredientId))
            .expr_as(
                Expr::col((ingredient::Entity, ingredient::Column::Name)),
                Alias::new("ingredient_name"),
            )
            .column((dish_ingredient::Entity, dish_ingredient::Column::Quantity))
            .column((dish_ingredient::Entity, dish_ingredient::Column::Unit))
            .expr_as(
                Expr::col((dish::Entity, dish::Column::CreatedOn)),
                Alias::new("used_on"),
            )
            .from(dish_ingredient::Entity)
            .join(
                JoinType::InnerJoin,
                dish::Entity,
                Expr::col((dish_ingredient::Entity, dish_ingredient::Column::DishId))
                    .equals((dish::Entity, dish::Column::Id)),
            )
            .join(
                JoinType::InnerJoin,
                inventory::Entity,
                Expr::col((dish_ingredient::Entity, dish_ingredient::Column::IngredientId))
                    .equals((inventory::Entity, inventory::Column::Id)),
            )
            .join(
                JoinType::InnerJoin,
                ingredient::Entity,
                Expr::col((ingredient::Entity, ingredient::Column::Id))
                    .equals((inventory::Entity, inventory::Column::IngredientId)),
            )
            .order_by(
                (dish_ingredient::Entity, dish_ingredient::Column::Id),
                Order::Asc,
            )
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &DishIngredientFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<DishIngredientRow>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: i64,
    ) -> StorageResult<DishIngredientRow> {
        let select = Self::base_select()
            .and_where(Expr::col((dish_ingredient::Entity, dish_ingredient::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateDishIngredient,
    ) -> StorageResult<DishIngredientRow> {
        let model = dish_ingredient::ActiveModel {
            dish_id: Set(form.dish_id),
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
        form: UpdateDishIngredient,
    ) -> StorageResult<DishIngredientRow> {
        let mut model = dish_ingredient::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(dish_id) = form.dish_id {
            model.dish_id = Set(dish_id);
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
    async fn test_dish_scoped_listing() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let page = DishIngredientRepository::list(
            db.get_connection(),
            &DishIngredientFilters {
                dish_id: Some(1),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 3);
        assert_eq!(page.items[0].dish_name, "mong bean rice");

        let page = DishIngredientRepository::list(
            db.get_connection(),
            &DishIngredientFilters {
                dish_id: Some(1),
                ingredient_name: Some("rice".to_string()),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].ingredient_name, "rice");
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_conflict() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let result = DishIngredientRepository::create(
            db.get_connection(),
            CreateDishIngredient {
                dish_id: 1,
                ingredient_id: 1,
                quantity: None,
                unit: None,
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_detail_carries_join_names() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let row = DishIngredientRepository::find_by_id(db.get_connection(), 2)
            .await
            .unwrap();
        assert_eq!(row.dish_name, "mong bean rice");
        assert_eq!(row.ingredient_name, "rice");
    }
}
