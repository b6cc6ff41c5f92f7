use chrono::NaiveDate;
use mealprepdb_api_types::{PageParams, ResourceLinks};
use mealprepdb_storage::repositories::{
    CreateDishIngredient, DishIngredientFilters, DishIngredientRow, UpdateDishIngredient,
};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for dish-ingredient list endpoints.
///
/// The nested `/dish/{id}/ingredient/` route adds the dish id from the
/// path; it is not a query parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct DishIngredientListParams {
    pub ingredient_name: Option<String>,
    #[serde(rename = "ingredient_name__contains")]
    pub ingredient_name_contains: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl DishIngredientListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self, dish_id: Option<i64>) -> DishIngredientFilters {
        DishIngredientFilters {
            dish_id,
            ingredient_name: self.ingredient_name.clone(),
            ingredient_name_contains: self.ingredient_name_contains.clone(),
        }
    }
}

impl Validate for DishIngredientListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDishIngredientRequest {
    pub dish_id: i64,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<CreateDishIngredientRequest> for CreateDishIngredient {
    fn from(req: CreateDishIngredientRequest) -> Self {
        CreateDishIngredient {
            dish_id: req.dish_id,
            ingredient_id: req.ingredient_id,
            quantity: req.quantity,
            unit: req.unit,
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDishIngredientRequest {
    pub dish_id: Option<i64>,
    pub ingredient_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<UpdateDishIngredientRequest> for UpdateDishIngredient {
    fn from(req: UpdateDishIngredientRequest) -> Self {
        UpdateDishIngredient {
            dish_id: req.dish_id,
            ingredient_id: req.ingredient_id,
            quantity: req.quantity,
            unit: req.unit,
        }
    }
}

/// Outgoing dish-ingredient representation
#[derive(Debug, Clone, Serialize)]
pub struct DishIngredientResource {
    pub id: i64,
    pub dish_id: i64,
    pub dish_name: String,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub used_on: Option<NaiveDate>,
    pub links: ResourceLinks,
}

impl DishIngredientResource {
    pub fn from_row(row: DishIngredientRow, prefix: &str) -> Self {
        let links = ResourceLinks::from([
            (
                "dish".to_string(),
                format!("{}/dish/{}", prefix, row.dish_id),
            ),
            (
                "ingredient_in_inventory".to_string(),
                format!("{}/ingredient_in_inventory/{}", prefix, row.ingredient_id),
            ),
        ]);

        Self {
            id: row.id,
            dish_id: row.dish_id,
            dish_name: row.dish_name,
            ingredient_id: row.ingredient_id,
            ingredient_name: row.ingredient_name,
            quantity: row.quantity,
            unit: row.unit,
            used_on: row.used_on,
            links,
        }
    }
}
