//! Inventory lot endpoints

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::{InventoryRepository, MealIngredientRepository};
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{
    CreateInventoryLotRequest, InventoryListParams, InventoryLotResource,
    MealIngredientListParams, MealIngredientResource, UpdateInventoryLotRequest,
};

/// Return a list of inventory lots
pub async fn ingredient_in_inventory_list_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<InventoryListParams>,
) -> RestResult<Json<ListResponse<InventoryLotResource>>> {
    info!("Listing inventory lots: {:?}", params);
    let page = params.page();
    let filters = params.filters();

    let txn = ctx.db.begin().await?;
    let result = InventoryRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
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
            .map(|row| InventoryLotResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}

/// Return an inventory lot detail
pub async fn ingredient_in_inventory_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<InventoryLotResource>> {
    let txn = ctx.db.begin().await?;
    let row = InventoryRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(InventoryLotResource::from_row(row, &ctx.api_prefix)))
}

/// Create an inventory lot
pub async fn ingredient_in_inventory_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateInventoryLotRequest>,
) -> RestResult<(StatusCode, Json<InventoryLotResource>)> {
    info!("Creating inventory lot for ingredient {}", form.ingredient_id);

    let txn = ctx.db.begin().await?;
    let row = InventoryRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(InventoryLotResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update an inventory lot in place
pub async fn ingredient_in_inventory_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateInventoryLotRequest>,
) -> RestResult<Json<InventoryLotResource>> {
    info!("Updating inventory lot {}", id);

    let txn = ctx.db.begin().await?;
    let row = InventoryRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(InventoryLotResource::from_row(row, &ctx.api_prefix)))
}

/// Return the meals an inventory lot was consumed in
pub async fn ingredient_meal_list_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<MealIngredientListParams>,
) -> RestResult<Json<ListResponse<MealIngredientResource>>> {
    info!("Listing meals for inventory lot {}: {:?}", id, params);
    let page = params.page();
    let filters = params.filters(Some(id));

    let txn = ctx.db.begin().await?;
    let result =
        MealIngredientRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
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
            .map(|row| MealIngredientResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}
