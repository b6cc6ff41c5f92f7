use crate::entities::{ingredient, ingredient_in_inventory as inventory};
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, FromQueryResult, Set};
use sea_query::{Expr, JoinType, Order, Query, SelectStatement};

/// Filter criteria for inventory lot list queries.
///
/// `name` filters refer to the joined ingredient name.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilters {
    pub name: Option<String>,
    pub name_contains: Option<String>,
    pub from_where: Option<String>,
    pub from_where_contains: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub purchased_on_le: Option<NaiveDate>,
    pub purchased_on_ge: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
    pub finished_on_le: Option<NaiveDate>,
    pub finished_on_ge: Option<NaiveDate>,
}

impl InventoryFilters {
    fn apply(&self, select: &mut SelectStatement) {
        if let Some(name) = &self.name {
            select.and_where(
                Expr::col((ingredient::Entity, ingredient::Column::Name)).eq(name.clone()),
            );
        }
        if let Some(fragment) = &self.name_contains {
            select.and_where(
                Expr::col((ingredient::Entity, ingredient::Column::Name))
                    .like(format!("%{}%", fragment)),
            );
        }
        if let Some(from_where) = &self.from_where {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::FromWhere)).eq(from_where.clone()),
            );
        }
        if let Some(fragment) = &self.from_where_contains {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::FromWhere))
                    .like(format!("%{}%", fragment)),
            );
        }
        if let Some(purchased_on) = self.purchased_on {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::PurchasedOn)).eq(purchased_on),
            );
        }
        if let Some(purchased_on_le) = self.purchased_on_le {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::PurchasedOn)).lte(purchased_on_le),
            );
        }
        if let Some(purchased_on_ge) = self.purchased_on_ge {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::PurchasedOn)).gte(purchased_on_ge),
            );
        }
        if let Some(finished_on) = self.finished_on {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::FinishedOn)).eq(finished_on),
            );
        }
        if let Some(finished_on_le) = self.finished_on_le {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::FinishedOn)).lte(finished_on_le),
            );
        }
        if let Some(finished_on_ge) = self.finished_on_ge {
            select.and_where(
                Expr::col((inventory::Entity, inventory::Column::FinishedOn)).gte(finished_on_ge),
            );
        }
    }
}

/// An inventory lot joined with its ingredient name
#[derive(Debug, Clone, FromQueryResult)]
pub struct InventoryLotRow {
    pub id: i64,
    /// Ingredient name via join
    pub name: String,
    pub ingredient_id: i64,
    pub from_where: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
}

/// Payload for inserting an inventory lot
#[derive(Debug, Clone)]
pub struct CreateInventoryLot {
    pub ingredient_id: i64,
    pub from_where: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
}

/// Payload for a partial inventory lot update
#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryLot {
    pub ingredient_id: Option<i64>,
    pub from_where: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
}

/// Repository for inventory lots
pub struct InventoryRepository;

impl InventoryRepository {
    /// Lots ordered by ingredient name, purchase date, then id so pages are
    /// stable.
    fn base_select() -> SelectStatement {
        Query::select()
            .column((inventory::Entity, inventory::Column::Id))
            .column((ingredient::Entity, ingredient::Column::Name))
            .column((inventory::Entity, inventory::Column::IngredientId))
            .column((inventory::Entity, inventory::Column::FromWhere))
            .column((inventory::Entity, inventory::Column::Brand))
            .column((inventory::Entity, inventory::Column::Price))
            .column((inventory::Entity, inventory::Column::Quantity))
            .column((inventory::Entity, inventory::Column::Unit))
            .column((inventory::Entity, inventory::Column::PurchasedOn))
            .column((inventory::Entity, inventory::Column::FinishedOn))
            .from(inventory::Entity)
            .join(
                JoinType::InnerJoin,
                ingredient::Entity,
                Expr::col((inventory::Entity, inventory::Column::IngredientId))
                    .equals((ingredient::Entity, ingredient::Column::Id)),
            )
            .order_by((ingredient::Entity, ingredient::Column::Name), Order::Asc)
            .order_by(
                (inventory::Entity, inventory::Column::PurchasedOn),
                Order::Asc,
            )
            .order_by((inventory::Entity, inventory::Column::Id), Order::Asc)
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &InventoryFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<InventoryLotRow>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> StorageResult<InventoryLotRow> {
        let select = Self::base_select()
            .and_where(Expr::col((inventory::Entity, inventory::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateInventoryLot,
    ) -> StorageResult<InventoryLotRow> {
        let model = inventory::ActiveModel {
            ingredient_id: Set(form.ingredient_id),
            from_where: Set(form.from_where),
            brand: Set(form.brand),
            price: Set(form.price),
            quantity: Set(form.quantity),
            unit: Set(form.unit),
            // purchase defaults to today, like the store-side default
            purchased_on: Set(Some(
                form.purchased_on
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            )),
            finished_on: Set(form.finished_on),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let inserted = model.insert(conn).await.map_err(StorageError::from_write_err)?;
        // re-read through the join so the ingredient name is present
        Self::find_by_id(conn, inserted.id).await
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i64,
        form: UpdateInventoryLot,
    ) -> StorageResult<InventoryLotRow> {
        let mut model = inventory::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(ingredient_id) = form.ingredient_id {
            model.ingredient_id = Set(ingredient_id);
        }
        if let Some(from_where) = form.from_where {
            model.from_where = Set(Some(from_where));
        }
        if let Some(brand) = form.brand {
            model.brand = Set(Some(brand));
        }
        if let Some(price) = form.price {
            model.price = Set(Some(price));
        }
        if let Some(quantity) = form.quantity {
            model.quantity = Set(Some(quantity));
        }
        if let Some(unit) = form.unit {
            model.unit = Set(Some(unit));
        }
        if let Some(purchased_on) = form.purchased_on {
            model.purchased_on = Set(Some(purchased_on));
        }
        if let Some(finished_on) = form.finished_on {
            model.finished_on = Set(Some(finished_on));
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
    async fn test_list_joins_ingredient_name() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;
        seeds::inventory(db.get_connection()).await;

        let page = InventoryRepository::list(
            db.get_connection(),
            &InventoryFilters::default(),
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 4);
        // ordered by ingredient name: mong beans, onion, onion, rice
        assert_eq!(page.items[0].name, "mong beans");
        assert_eq!(page.items[1].name, "onion");
        assert_eq!(page.items[3].name, "rice");
    }

    #[tokio::test]
    async fn test_purchased_on_le_filter() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;
        seeds::inventory(db.get_connection()).await;

        let page = InventoryRepository::list(
            db.get_connection(),
            &InventoryFilters {
                name: Some("onion".to_string()),
                purchased_on_le: Some(date("2017-07-02")),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].purchased_on, Some(date("2017-07-01")));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_ingredient() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;

        let result = InventoryRepository::create(
            db.get_connection(),
            CreateInventoryLot {
                ingredient_id: 99,
                from_where: None,
                brand: None,
                price: None,
                quantity: None,
                unit: None,
                purchased_on: Some(date("2020-01-01")),
                finished_on: None,
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_partial_update_marks_finished() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;
        seeds::inventory(db.get_connection()).await;

        let before = InventoryRepository::find_by_id(db.get_connection(), 3)
            .await
            .unwrap();
        assert_eq!(before.finished_on, None);

        let after = InventoryRepository::update(
            db.get_connection(),
            3,
            UpdateInventoryLot {
                finished_on: Some(date("2017-08-01")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(after.finished_on, Some(date("2017-08-01")));
        // untouched fields survive
        assert_eq!(after.brand.as_deref(), Some("buen arroz"));
        assert_eq!(after.purchased_on, before.purchased_on);
    }
}
