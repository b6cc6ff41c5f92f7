use chrono::NaiveDate;
use mealprepdb_api_types::{MealType, PageParams, ResourceLinks};
use mealprepdb_storage::repositories::{
    CreateMealIngredient, MealIngredientFilters, MealIngredientRow, UpdateMealIngredient,
};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for meal-ingredient list endpoints.
///
/// The nested `/ingredient_in_inventory/{id}/meal/` route adds the lot id
/// from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct MealIngredientListParams {
    pub ingredient_name: Option<String>,
    #[serde(rename = "ingredient_name__contains")]
    pub ingredient_name_contains: Option<String>,
    pub consumed_on: Option<NaiveDate>,
    #[serde(rename = "consumed_on__le")]
    pub consumed_on_le: Option<NaiveDate>,
    #[serde(rename = "consumed_on__ge")]
    pub consumed_on_ge: Option<NaiveDate>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl MealIngredientListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self, ingredient_id: Option<i64>) -> MealIngredientFilters {
        MealIngredientFilters {
            ingredient_id,
            ingredient_name: self.ingredient_name.clone(),
            ingredient_name_contains: self.ingredient_name_contains.clone(),
            consumed_on: self.consumed_on,
            consumed_on_le: self.consumed_on_le,
            consumed_on_ge: self.consumed_on_ge,
        }
    }
}

impl Validate for MealIngredientListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealIngredientRequest {
    pub meal_id: i64,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<CreateMealIngredientRequest> for CreateMealIngredient {
    fn from(req: CreateMealIngredientRequest) -> Self {
        CreateMealIngredient {
            meal_id: req.meal_id,
            ingredient_id: req.ingredient_id,
            quantity: req.quantity,
            unit: req.unit,
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMealIngredientRequest {
    pub meal_id: Option<i64>,
    pub ingredient_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<UpdateMealIngredientRequest> for UpdateMealIngredient {
    fn from(req: UpdateMealIngredientRequest) -> Self {
        UpdateMealIngredient {
            meal_id: req.meal_id,
            ingredient_id: req.ingredient_id,
            quantity: req.quantity,
            unit: req.unit,
        }
    }
}

/// Outgoing meal-ingredient representation
#[derive(Debug, Clone, Serialize)]
pub struct MealIngredientResource {
    pub id: i64,
    pub meal_type: Option<MealType>,
    pub meal_id: i64,
    pub ingredient_name: String,
    /// Inventory lot id
    pub ingredient_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub consumed_on: NaiveDate,
    pub links: ResourceLinks,
}

impl MealIngredientResource {
    pub fn from_row(row: MealIngredientRow, prefix: &str) -> Self {
        let links = ResourceLinks::from([
            (
                "self".to_string(),
                format!("{}/meal_ingredient/{}", prefix, row.id),
            ),
            (
                "ingredient_in_inventory".to_string(),
                format!("{}/ingredient_in_inventory/{}", prefix, row.ingredient_id),
            ),
            (
                "meal".to_string(),
                format!("{}/meal/{}", prefix, row.meal_id),
            ),
        ]);

        Self {
            id: row.id,
            meal_type: row.meal_type.as_deref().and_then(|s| s.parse().ok()),
            meal_id: row.meal_id,
            ingredient_name: row.ingredient_name,
            ingredient_id: row.ingredient_id,
            quantity: row.quantity,
            unit: row.unit,
            consumed_on: row.consumed_on,
            links,
        }
    }
}
