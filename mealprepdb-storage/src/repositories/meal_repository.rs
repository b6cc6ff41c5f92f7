use crate::entities::meal;
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use sea_query::{Expr, Order, Query, SelectStatement};

/// Filter criteria for meal list queries
#[derive(Debug, Clone, Default)]
pub struct MealFilters {
    pub r#type: Option<String>,
    pub consumed_on: Option<NaiveDate>,
    pub consumed_on_le: Option<NaiveDate>,
    pub consumed_on_ge: Option<NaiveDate>,
}

impl MealFilters {
    fn apply(&self, select: &mut SelectStatement) {
        if let Some(r#type) = &self.r#type {
            select.and_where(Expr::col((meal::Entity, meal::Column::Type)).eq(r#type.clone()));
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

/// Payload for inserting a meal
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub r#type: Option<String>,
    pub description: String,
    pub consumed_on: NaiveDate,
}

/// Payload for a partial meal update
#[derive(Debug, Clone, Default)]
pub struct UpdateMeal {
    pub r#type: Option<String>,
    pub description: Option<String>,
    pub consumed_on: Option<NaiveDate>,
}

/// Repository for meal rows
pub struct MealRepository;

impl MealRepository {
    fn base_select() -> SelectStatement {
        Query::select()
            .columns([
                meal::Column::Id,
                meal::Column::Type,
                meal::Column::Description,
                meal::Column::ConsumedOn,
                meal::Column::UpdatedOn,
            ])
            .from(meal::Entity)
            .order_by((meal::Entity, meal::Column::Id), Order::Asc)
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &MealFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<meal::Model>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> StorageResult<meal::Model> {
        let select = Self::base_select()
            .and_where(Expr::col((meal::Entity, meal::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateMeal,
    ) -> StorageResult<meal::Model> {
        let model = meal::ActiveModel {
            r#type: Set(form.r#type),
            description: Set(Some(form.description)),
            consumed_on: Set(form.consumed_on),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };

        model.insert(conn).await.map_err(StorageError::from_write_err)
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i64,
        form: UpdateMeal,
    ) -> StorageResult<meal::Model> {
        let mut model = meal::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(r#type) = form.r#type {
            model.r#type = Set(Some(r#type));
        }
        if let Some(description) = form.description {
            model.description = Set(Some(description));
        }
        if let Some(consumed_on) = form.consumed_on {
            model.consumed_on = Set(consumed_on);
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
    async fn test_type_and_date_filters() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let page = MealRepository::list(db.get_connection(), &MealFilters::default(), 0, 1000)
            .await
            .unwrap();
        assert_eq!(page.total_count, 1);

        let page = MealRepository::list(
            db.get_connection(),
            &MealFilters {
                r#type: Some("dinner".to_string()),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());

        let page = MealRepository::list(
            db.get_connection(),
            &MealFilters {
                consumed_on_ge: Some(date("2017-07-06")),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let db = create_test_db().await;
        seeds::all(db.get_connection()).await;

        let updated = MealRepository::update(
            db.get_connection(),
            1,
            UpdateMeal {
                r#type: Some("dinner".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.r#type.as_deref(), Some("dinner"));
        assert_eq!(updated.description.as_deref(), Some("mong bean rice lunch"));
        assert_eq!(updated.consumed_on, date("2017-07-06"));
    }
}
