//! Meal-ingredient endpoints

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::MealIngredientRepository;
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{
    CreateMealIngredientRequest, MealIngredientListParams, MealIngredientResource,
    UpdateMealIngredientRequest,
};

/// Return a list of meal-ingredient rows across all meals
pub async fn meal_ingredient_collection_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<MealIngredientListParams>,
) -> RestResult<Json<ListResponse<MealIngredientResource>>> {
    info!("Listing meal ingredients: {:?}", params);
    let page = params.page();
    let filters = params.filters(None);

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

/// Return a meal-ingredient detail
pub async fn meal_ingredient_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<MealIngredientResource>> {
    let txn = ctx.db.begin().await?;
    let row = MealIngredientRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(MealIngredientResource::from_row(row, &ctx.api_prefix)))
}

/// Attach an inventory lot to a meal
pub async fn meal_ingredient_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateMealIngredientRequest>,
) -> RestResult<(StatusCode, Json<MealIngredientResource>)> {
    info!(
        "Creating meal ingredient: meal {} lot {}",
        form.meal_id, form.ingredient_id
    );

    let txn = ctx.db.begin().await?;
    let row = MealIngredientRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(MealIngredientResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update a meal-ingredient row in place
pub async fn meal_ingredient_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateMealIngredientRequest>,
) -> RestResult<Json<MealIngredientResource>> {
    info!("Updating meal ingredient {}", id);

    let txn = ctx.db.begin().await?;
    let row = MealIngredientRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(MealIngredientResource::from_row(row, &ctx.api_prefix)))
}
