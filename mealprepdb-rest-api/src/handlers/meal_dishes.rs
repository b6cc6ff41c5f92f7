//! Meal-dish endpoints

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::MealDishRepository;
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{
    CreateMealDishRequest, MealDishListParams, MealDishResource, UpdateMealDishRequest,
};

/// Return a list of meal-dish rows across all meals
pub async fn meal_dish_collection_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<MealDishListParams>,
) -> RestResult<Json<ListResponse<MealDishResource>>> {
    info!("Listing meal dishes: {:?}", params);
    let page = params.page();
    let filters = params.filters(None);

    let txn = ctx.db.begin().await?;
    let result = MealDishRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
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
            .map(|row| MealDishResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}

/// Return a meal-dish detail
pub async fn meal_dish_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<MealDishResource>> {
    let txn = ctx.db.begin().await?;
    let row = MealDishRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(MealDishResource::from_row(row, &ctx.api_prefix)))
}

/// Attach a dish to a meal
pub async fn meal_dish_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateMealDishRequest>,
) -> RestResult<(StatusCode, Json<MealDishResource>)> {
    info!(
        "Creating meal dish: meal {} dish {}",
        form.meal_id, form.dish_id
    );

    let txn = ctx.db.begin().await?;
    let row = MealDishRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MealDishResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update a meal-dish row in place
pub async fn meal_dish_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateMealDishRequest>,
) -> RestResult<Json<MealDishResource>> {
    info!("Updating meal dish {}", id);

    let txn = ctx.db.begin().await?;
    let row = MealDishRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(MealDishResource::from_row(row, &ctx.api_prefix)))
}
