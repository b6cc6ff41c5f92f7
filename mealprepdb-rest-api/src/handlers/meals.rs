//! Meal endpoints

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::MealRepository;
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{CreateMealRequest, MealListParams, MealResource, UpdateMealRequest};

/// Return a list of meals
pub async fn meal_list_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<MealListParams>,
) -> RestResult<Json<ListResponse<MealResource>>> {
    info!("Listing meals: {:?}", params);
    let page = params.page();
    let filters = params.filters();

    let txn = ctx.db.begin().await?;
    let result = MealRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    let next_url = next_page_url(
        &uri.to_string(),
        page.offset(),
        page.limit(),
        result.items.len(),
        result.total_count,
        &ctx.api_prefix,
    );

    Ok(Json(ListResponse {
        total_count: result.total_count,
        next_url,
        results: result
            .items
            .into_iter()
            .map(|row| MealResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}

/// Return a meal detail
pub async fn meal_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<MealResource>> {
    let txn = ctx.db.begin().await?;
    let row = MealRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(MealResource::from_row(row, &ctx.api_prefix)))
}

/// Create a meal
pub async fn meal_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateMealRequest>,
) -> RestResult<(StatusCode, Json<MealResource>)> {
    info!("Creating meal consumed on {}", form.consumed_on);

    let txn = ctx.db.begin().await?;
    let row = MealRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MealResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update a meal in place
pub async fn meal_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateMealRequest>,
) -> RestResult<Json<MealResource>> {
    info!("Updating meal {}", id);

    let txn = ctx.db.begin().await?;
    let row = MealRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(MealResource::from_row(row, &ctx.api_prefix)))
}
