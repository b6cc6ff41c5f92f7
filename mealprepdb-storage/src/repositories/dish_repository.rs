use crate::entities::dish;
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use sea_query::{Expr, Order, Query, SelectStatement};

/// Filter criteria for dish list queries
#[derive(Debug, Clone, Default)]
pub struct DishFilters {
    pub name: Option<String>,
    pub name_contains: Option<String>,
    pub created_on: Option<NaiveDate>,
    pub created_on_le: Option<NaiveDate>,
    pub created_on_ge: Option<NaiveDate>,
}

impl DishFilters {
    fn apply(&self, select: &mut SelectStatement) {
        if let Some(name) = &self.name {
            select.and_where(Expr::col((dish::Entity, dish::Column::Name)).eq(name.clone()));
        }
        if let Some(fragment) = &self.name_contains {
            select.and_where(
                Expr::col((dish::Entity, dish::Column::Name)).like(format!("%{}%", fragment)),
            );
        }
        if let Some(created_on) = self.created_on {
            select.and_where(Expr::col((dish::Entity, dish::Column::CreatedOn)).eq(created_on));
        }
        if let Some(created_on_le) = self.created_on_le {
            select.and_where(Expr::col((dish::Entity, dish::Column::CreatedOn)).lte(created_on_le));
        }
        if let Some(created_on_ge) = self.created_on_ge {
            select.and_where(Expr::col((dish::Entity, dish::Column::CreatedOn)).gte(created_on_ge));
        }
    }
}

/// Payload for inserting a dish
#[derive(Debug, Clone)]
pub struct CreateDish {
    pub name: String,
    pub parent_dish_id: Option<i64>,
    pub created_on: Option<NaiveDate>,
}

/// Payload for a partial dish update
#[derive(Debug, Clone, Default)]
pub struct UpdateDish {
    pub name: Option<String>,
    pub parent_dish_id: Option<i64>,
    pub created_on: Option<NaiveDate>,
}

/// Repository for dish rows
pub struct DishRepository;

impl DishRepository {
    fn base_select() -> SelectStatement {
        Query::select()
            .columns([
                dish::Column::Id,
                dish::Column::Name,
                dish::Column::ParentDishId,
                dish::Column::CreatedOn,
                dish::Column::UpdatedOn,
            ])
            .from(dish::Entity)
            .order_by((dish::Entity, dish::Column::Id), Order::Asc)
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &DishFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<dish::Model>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> StorageResult<dish::Model> {
        let select = Self::base_select()
            .and_where(Expr::col((dish::Entity, dish::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateDish,
    ) -> StorageResult<dish::Model> {
        let model = dish::ActiveModel {
            name: Set(form.name),
            parent_dish_id: Set(form.parent_dish_id),
            created_on: Set(Some(
                form.created_on
                    .unwrap_or_else(|| chrono::Utc::now().date_naive()),
            )),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };

        model.insert(conn).await.map_err(StorageError::from_write_err)
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i64,
        form: UpdateDish,
    ) -> StorageResult<dish::Model> {
        let mut model = dish::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(name) = form.name {
            model.name = Set(name);
        }
        if let Some(parent_dish_id) = form.parent_dish_id {
            model.parent_dish_id = Set(Some(parent_dish_id));
        }
        if let Some(created_on) = form.created_on {
            model.created_on = Set(Some(created_on));
        }

        model.update(conn).await.map_err(StorageError::from_write_err)
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
    async fn test_list_and_date_filters() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;
        seeds::inventory(db.get_connection()).await;
        seeds::dishes(db.get_connection()).await;

        let page =
            DishRepository::list(db.get_connection(), &DishFilters::default(), 0, 1000)
                .await
                .unwrap();
        assert_eq!(page.total_count, 2);

        let page = DishRepository::list(
            db.get_connection(),
            &DishFilters {
                created_on_le: Some(date("2017-07-03")),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "mong bean rice");
    }

    #[tokio::test]
    async fn test_composed_dish_references_parent() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;
        seeds::inventory(db.get_connection()).await;
        seeds::dishes(db.get_connection()).await;

        let child = DishRepository::find_by_id(db.get_connection(), 2).await.unwrap();
        assert_eq!(child.parent_dish_id, Some(1));
    }

    #[tokio::test]
    async fn test_create_with_unknown_parent_is_conflict() {
        let db = create_test_db().await;

        let result = DishRepository::create(
            db.get_connection(),
            CreateDish {
                name: "orphan".to_string(),
                parent_dish_id: Some(42),
                created_on: None,
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }
}
