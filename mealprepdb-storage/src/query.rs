//! Generic list/detail query execution
//!
//! Decouples "what to select and filter" (one base select per resource,
//! built with sea-query) from "how to run and paginate it" (identical for
//! every resource). A list query fetches the page rows and the total count
//! of rows matching the filters in a single round trip by attaching a
//! window-function count column to every row.

use crate::error::{StorageError, StorageResult};
use sea_orm::{ConnectionTrait, FromQueryResult};
use sea_query::{Alias, Expr, SelectStatement};

/// Result column carrying the pre-pagination row count.
pub const TOTAL_COUNT_COL: &str = "total_count";

/// One page of rows plus the total count of rows matching the filters
/// before offset/limit were applied.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// Execute a list select against `conn`, returning at most `limit` rows
/// starting at `offset` together with the total match count.
///
/// The caller's select must already carry its columns, joins, filters and a
/// deterministic ORDER BY; this function only appends the count column and
/// the page window.
pub async fn fetch_page<T, C>(
    conn: &C,
    mut select: SelectStatement,
    offset: u64,
    limit: u64,
) -> StorageResult<Page<T>>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    select
        .expr_as(Expr::cust("COUNT(*) OVER ()"), Alias::new(TOTAL_COUNT_COL))
        .offset(offset)
        .limit(limit);

    let stmt = conn.get_database_backend().build(&select);
    let rows = conn.query_all(stmt).await?;

    // An empty page carries no count column to read; an offset past the
    // end therefore reports total_count 0.
    let Some(first) = rows.first() else {
        return Ok(Page {
            items: Vec::new(),
            total_count: 0,
        });
    };

    let total_count: i64 = first.try_get("", TOTAL_COUNT_COL)?;
    let items = rows
        .iter()
        .map(|row| T::from_query_result(row, ""))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page {
        items,
        total_count: total_count.max(0) as u64,
    })
}

/// Execute a detail select expected to match at most one row.
///
/// Zero rows is a not-found condition, not an empty list.
pub async fn fetch_one<T, C>(conn: &C, select: SelectStatement) -> StorageResult<T>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    let stmt = conn.get_database_backend().build(&select);
    let row = conn.query_one(stmt).await?;

    match row {
        Some(row) => Ok(T::from_query_result(&row, "")?),
        None => Err(StorageError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ingredient;
    use crate::testing::create_test_db;
    use sea_orm::Set;
    use sea_query::{Order, Query};

    async fn seed_names(db: &crate::DatabaseConnection, names: &[&str]) {
        use sea_orm::ActiveModelTrait;
        for name in names {
            ingredient::ActiveModel {
                name: Set(name.to_string()),
                updated_on: Set(chrono::Utc::now()),
                ..Default::default()
            }
            .insert(db.get_connection())
            .await
            .unwrap();
        }
    }

    fn base_select() -> SelectStatement {
        Query::select()
            .columns([
                ingredient::Column::Id,
                ingredient::Column::Name,
                ingredient::Column::Type,
                ingredient::Column::UpdatedOn,
            ])
            .from(ingredient::Entity)
            .order_by(ingredient::Column::Id, Order::Asc)
            .to_owned()
    }

    #[tokio::test]
    async fn test_fetch_page_counts_before_pagination() {
        let db = create_test_db().await;
        seed_names(&db, &["a", "b", "c", "d", "e"]).await;

        let page: Page<ingredient::Model> =
            fetch_page(db.get_connection(), base_select(), 0, 2).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_count, 5);

        let page: Page<ingredient::Model> =
            fetch_page(db.get_connection(), base_select(), 4, 2).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_count, 5);
    }

    #[tokio::test]
    async fn test_fetch_page_empty_short_circuit() {
        let db = create_test_db().await;

        let page: Page<ingredient::Model> =
            fetch_page(db.get_connection(), base_select(), 0, 10).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_fetch_page_offset_past_end_reports_zero() {
        let db = create_test_db().await;
        seed_names(&db, &["a", "b"]).await;

        let page: Page<ingredient::Model> =
            fetch_page(db.get_connection(), base_select(), 10, 10).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_fetch_one_not_found() {
        let db = create_test_db().await;

        let select = base_select()
            .and_where(Expr::col(ingredient::Column::Id).eq(42))
            .to_owned();
        let result: StorageResult<ingredient::Model> =
            fetch_one(db.get_connection(), select).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_fetch_one_returns_matching_row() {
        let db = create_test_db().await;
        seed_names(&db, &["onion"]).await;

        let select = base_select()
            .and_where(Expr::col(ingredient::Column::Name).eq("onion"))
            .to_owned();
        let row: ingredient::Model = fetch_one(db.get_connection(), select).await.unwrap();
        assert_eq!(row.name, "onion");
    }
}
