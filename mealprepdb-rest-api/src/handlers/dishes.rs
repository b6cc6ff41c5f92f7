//! Dish endpoints, including the nested dish-scoped listings

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::{
    DishIngredientRepository, DishRepository, MealDishRepository,
};
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{
    CreateDishRequest, DishIngredientListParams, DishIngredientResource, DishListParams,
    DishResource, MealDishListParams, MealDishResource, UpdateDishRequest,
};

/// Return a list of dishes
pub async fn dish_list_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<DishListParams>,
) -> RestResult<Json<ListResponse<DishResource>>> {
    info!("Listing dishes: {:?}", params);
    let page = params.page();
    let filters = params.filters();

    let txn = ctx.db.begin().await?;
    let result = DishRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
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
            .map(|row| DishResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}

/// Return a dish detail
pub async fn dish_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<DishResource>> {
    let txn = ctx.db.begin().await?;
    let row = DishRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(DishResource::from_row(row, &ctx.api_prefix)))
}

/// Create a dish
pub async fn dish_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateDishRequest>,
) -> RestResult<(StatusCode, Json<DishResource>)> {
    info!("Creating dish: {}", form.name);

    let txn = ctx.db.begin().await?;
    let row = DishRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(DishResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update a dish in place
pub async fn dish_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateDishRequest>,
) -> RestResult<Json<DishResource>> {
    info!("Updating dish {}", id);

    let txn = ctx.db.begin().await?;
    let row = DishRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(DishResource::from_row(row, &ctx.api_prefix)))
}

/// Return the ingredients used in a dish
pub async fn dish_ingredient_list_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<DishIngredientListParams>,
) -> RestResult<Json<ListResponse<DishIngredientResource>>> {
    info!("Listing ingredients for dish {}: {:?}", id, params);
    let page = params.page();
    let filters = params.filters(Some(id));

    let txn = ctx.db.begin().await?;
    let result =
        DishIngredientRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
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
            .map(|row| DishIngredientResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}

/// Return the meals a dish was consumed in
pub async fn dish_meal_list_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<MealDishListParams>,
) -> RestResult<Json<ListResponse<MealDishResource>>> {
    info!("Listing meals for dish {}: {:?}", id, params);
    let page = params.page();
    let filters = params.filters(Some(id));

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
