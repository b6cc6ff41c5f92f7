use crate::entities::ingredient;
use crate::error::{StorageError, StorageResult};
use crate::query::{fetch_one, fetch_page, Page};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use sea_query::{Expr, Order, Query, SelectStatement};

/// Filter criteria for ingredient list queries
#[derive(Debug, Clone, Default)]
pub struct IngredientFilters {
    pub name: Option<String>,
    pub name_contains: Option<String>,
    pub r#type: Option<String>,
}

impl IngredientFilters {
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
        if let Some(r#type) = &self.r#type {
            select.and_where(
                Expr::col((ingredient::Entity, ingredient::Column::Type)).eq(r#type.clone()),
            );
        }
    }
}

/// Payload for inserting an ingredient
#[derive(Debug, Clone)]
pub struct CreateIngredient {
    pub name: String,
    pub r#type: Option<String>,
}

/// Payload for a partial ingredient update; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateIngredient {
    pub name: Option<String>,
    pub r#type: Option<String>,
}

/// Repository for ingredient rows
pub struct IngredientRepository;

impl IngredientRepository {
    fn base_select() -> SelectStatement {
        Query::select()
            .columns([
                ingredient::Column::Id,
                ingredient::Column::Name,
                ingredient::Column::Type,
                ingredient::Column::UpdatedOn,
            ])
            .from(ingredient::Entity)
            .order_by((ingredient::Entity, ingredient::Column::Id), Order::Asc)
            .to_owned()
    }

    pub async fn list<C: ConnectionTrait>(
        conn: &C,
        filters: &IngredientFilters,
        offset: u64,
        limit: u64,
    ) -> StorageResult<Page<ingredient::Model>> {
        let mut select = Self::base_select();
        filters.apply(&mut select);
        fetch_page(conn, select, offset, limit).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        conn: &C,
        id: i64,
    ) -> StorageResult<ingredient::Model> {
        let select = Self::base_select()
            .and_where(Expr::col((ingredient::Entity, ingredient::Column::Id)).eq(id))
            .to_owned();
        fetch_one(conn, select).await
    }

    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        form: CreateIngredient,
    ) -> StorageResult<ingredient::Model> {
        let model = ingredient::ActiveModel {
            name: Set(form.name),
            r#type: Set(form.r#type),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };

        model.insert(conn).await.map_err(StorageError::from_write_err)
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        id: i64,
        form: UpdateIngredient,
    ) -> StorageResult<ingredient::Model> {
        let mut model = ingredient::ActiveModel {
            id: Set(id),
            updated_on: Set(chrono::Utc::now()),
            ..Default::default()
        };
        if let Some(name) = form.name {
            model.name = Set(name);
        }
        if let Some(r#type) = form.r#type {
            model.r#type = Set(Some(r#type));
        }

        model.update(conn).await.map_err(StorageError::from_write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{create_test_db, seeds};

    #[tokio::test]
    async fn test_list_with_filters() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;

        let page = IngredientRepository::list(
            db.get_connection(),
            &IngredientFilters::default(),
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 4);
        assert_eq!(page.items.len(), 4);

        let page = IngredientRepository::list(
            db.get_connection(),
            &IngredientFilters {
                r#type: Some("spice".to_string()),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "cumin");

        // "ri" matches only rice among the seeds
        let page = IngredientRepository::list(
            db.get_connection(),
            &IngredientFilters {
                name_contains: Some("ri".to_string()),
                ..Default::default()
            },
            0,
            1000,
        )
        .await
        .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "rice");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;

        let row = IngredientRepository::find_by_id(db.get_connection(), 1)
            .await
            .unwrap();
        assert_eq!(row.name, "onion");

        let missing = IngredientRepository::find_by_id(db.get_connection(), 99).await;
        assert!(matches!(missing, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;

        let result = IngredientRepository::create(
            db.get_connection(),
            CreateIngredient {
                name: "onion".to_string(),
                r#type: None,
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));

        // the failed insert left nothing behind
        let page = IngredientRepository::list(
            db.get_connection(),
            &IngredientFilters {
                name: Some("onion".to_string()),
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
    async fn test_partial_update_preserves_unset_fields() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;

        let updated = IngredientRepository::update(
            db.get_connection(),
            1,
            UpdateIngredient {
                r#type: Some("vegetable".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "onion");
        assert_eq!(updated.r#type.as_deref(), Some("vegetable"));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_conflict() {
        let db = create_test_db().await;
        seeds::ingredients(db.get_connection()).await;

        let result = IngredientRepository::update(
            db.get_connection(),
            99,
            UpdateIngredient {
                name: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }
}
