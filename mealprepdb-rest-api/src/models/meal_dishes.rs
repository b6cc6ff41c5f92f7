use chrono::NaiveDate;
use mealprepdb_api_types::{MealType, PageParams, ResourceLinks};
use mealprepdb_storage::repositories::{
    CreateMealDish, MealDishFilters, MealDishRow, UpdateMealDish,
};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for meal-dish list endpoints.
///
/// The nested `/dish/{id}/meal/` route adds the dish id from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct MealDishListParams {
    pub dish_name: Option<String>,
    #[serde(rename = "dish_name__contains")]
    pub dish_name_contains: Option<String>,
    pub consumed_on: Option<NaiveDate>,
    #[serde(rename = "consumed_on__le")]
    pub consumed_on_le: Option<NaiveDate>,
    #[serde(rename = "consumed_on__ge")]
    pub consumed_on_ge: Option<NaiveDate>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl MealDishListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self, dish_id: Option<i64>) -> MealDishFilters {
        MealDishFilters {
            dish_id,
            dish_name: self.dish_name.clone(),
            dish_name_contains: self.dish_name_contains.clone(),
            consumed_on: self.consumed_on,
            consumed_on_le: self.consumed_on_le,
            consumed_on_ge: self.consumed_on_ge,
        }
    }
}

impl Validate for MealDishListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealDishRequest {
    pub meal_id: i64,
    pub dish_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<CreateMealDishRequest> for CreateMealDish {
    fn from(req: CreateMealDishRequest) -> Self {
        CreateMealDish {
            meal_id: req.meal_id,
            dish_id: req.dish_id,
            quantity: req.quantity,
            unit: req.unit,
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMealDishRequest {
    pub meal_id: Option<i64>,
    pub dish_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl From<UpdateMealDishRequest> for UpdateMealDish {
    fn from(req: UpdateMealDishRequest) -> Self {
        UpdateMealDish {
            meal_id: req.meal_id,
            dish_id: req.dish_id,
            quantity: req.quantity,
            unit: req.unit,
        }
    }
}

/// Outgoing meal-dish representation
#[derive(Debug, Clone, Serialize)]
pub struct MealDishResource {
    pub id: i64,
    pub meal_type: Option<MealType>,
    pub meal_id: i64,
    pub dish_name: String,
    pub dish_id: i64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub consumed_on: NaiveDate,
    pub dish_created_on: Option<NaiveDate>,
    pub links: ResourceLinks,
}

impl MealDishResource {
    pub fn from_row(row: MealDishRow, prefix: &str) -> Self {
        let links = ResourceLinks::from([
            (
                "self".to_string(),
                format!("{}/meal_dish/{}", prefix, row.id),
            ),
            (
                "dish".to_string(),
                format!("{}/dish/{}", prefix, row.dish_id),
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
            dish_name: row.dish_name,
            dish_id: row.dish_id,
            quantity: row.quantity,
            unit: row.unit,
            consumed_on: row.consumed_on,
            dish_created_on: row.dish_created_on,
            links,
        }
    }
}
