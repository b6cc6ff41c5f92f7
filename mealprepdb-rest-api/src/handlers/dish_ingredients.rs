//! Dish-ingredient endpoints

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::DishIngredientRepository;
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{
    CreateDishIngredientRequest, DishIngredientListParams, DishIngredientResource,
    UpdateDishIngredientRequest,
};

/// Return a list of dish-ingredient rows across all dishes
pub async fn dish_ingredient_collection_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<DishIngredientListParams>,
) -> RestResult<Json<ListResponse<DishIngredientResource>>> {
    info!("Listing dish ingredients: {:?}", params);
    let page = params.page();
    let filters = params.filters(None);

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

/// Return a dish-ingredient detail
pub async fn dish_ingredient_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<DishIngredientResource>> {
    let txn = ctx.db.begin().await?;
    let row = DishIngredientRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(DishIngredientResource::from_row(row, &ctx.api_prefix)))
}

/// Attach an inventory lot to a dish
pub async fn dish_ingredient_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateDishIngredientRequest>,
) -> RestResult<(StatusCode, Json<DishIngredientResource>)> {
    info!(
        "Creating dish ingredient: dish {} lot {}",
        form.dish_id, form.ingredient_id
    );

    let txn = ctx.db.begin().await?;
    let row = DishIngredientRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(DishIngredientResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update a dish-ingredient row in place
pub async fn dish_ingredient_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateDishIngredientRequest>,
) -> RestResult<Json<DishIngredientResource>> {
    info!("Updating dish ingredient {}", id);

    let txn = ctx.db.begin().await?;
    let row = DishIngredientRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(DishIngredientResource::from_row(row, &ctx.api_prefix)))
}
