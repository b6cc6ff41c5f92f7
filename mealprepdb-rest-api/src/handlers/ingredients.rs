//! Ingredient endpoints

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use mealprepdb_api_types::{next_page_url, ListResponse};
use mealprepdb_storage::repositories::IngredientRepository;
use mealprepdb_storage::StorageError;
use mealprepdb_web::{ValidatedJson, ValidatedQuery};
use tracing::info;

use crate::context::AppContext;
use crate::errors::RestResult;
use crate::models::{
    CreateIngredientRequest, IngredientListParams, IngredientResource, UpdateIngredientRequest,
};

/// Return a list of ingredients
pub async fn ingredient_list_view(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    ValidatedQuery(params): ValidatedQuery<IngredientListParams>,
) -> RestResult<Json<ListResponse<IngredientResource>>> {
    info!("Listing ingredients: {:?}", params);
    let page = params.page();
    let filters = params.filters();

    let txn = ctx.db.begin().await?;
    let result = IngredientRepository::list(&txn, &filters, page.offset(), page.limit()).await?;
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
            .map(|row| IngredientResource::from_row(row, &ctx.api_prefix))
            .collect(),
    }))
}

/// Return an ingredient detail
pub async fn ingredient_detail_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
) -> RestResult<Json<IngredientResource>> {
    let txn = ctx.db.begin().await?;
    let row = IngredientRepository::find_by_id(&txn, id).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(IngredientResource::from_row(row, &ctx.api_prefix)))
}

/// Create an ingredient
pub async fn ingredient_create_view(
    State(ctx): State<AppContext>,
    ValidatedJson(form): ValidatedJson<CreateIngredientRequest>,
) -> RestResult<(StatusCode, Json<IngredientResource>)> {
    info!("Creating ingredient: {}", form.name);

    let txn = ctx.db.begin().await?;
    let row = IngredientRepository::create(&txn, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(IngredientResource::from_row(row, &ctx.api_prefix)),
    ))
}

/// Update an ingredient in place
pub async fn ingredient_update_view(
    State(ctx): State<AppContext>,
    Path(id): Path<i64>,
    ValidatedJson(form): ValidatedJson<UpdateIngredientRequest>,
) -> RestResult<Json<IngredientResource>> {
    info!("Updating ingredient {}", id);

    let txn = ctx.db.begin().await?;
    let row = IngredientRepository::update(&txn, id, form.into()).await?;
    txn.commit().await.map_err(StorageError::from)?;

    Ok(Json(IngredientResource::from_row(row, &ctx.api_prefix)))
}
