use chrono::NaiveDate;
use mealprepdb_api_types::{MealType, PageParams, ResourceLinks};
use mealprepdb_storage::entities::meal;
use mealprepdb_storage::repositories::{CreateMeal, MealFilters, UpdateMeal};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for the meal list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MealListParams {
    pub r#type: Option<MealType>,
    pub consumed_on: Option<NaiveDate>,
    #[serde(rename = "consumed_on__le")]
    pub consumed_on_le: Option<NaiveDate>,
    #[serde(rename = "consumed_on__ge")]
    pub consumed_on_ge: Option<NaiveDate>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl MealListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self) -> MealFilters {
        MealFilters {
            r#type: self.r#type.map(|t| t.as_str().to_string()),
            consumed_on: self.consumed_on,
            consumed_on_le: self.consumed_on_le,
            consumed_on_ge: self.consumed_on_ge,
        }
    }
}

impl Validate for MealListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMealRequest {
    pub r#type: Option<MealType>,
    pub description: String,
    pub consumed_on: NaiveDate,
}

impl From<CreateMealRequest> for CreateMeal {
    fn from(req: CreateMealRequest) -> Self {
        CreateMeal {
            r#type: req.r#type.map(|t| t.as_str().to_string()),
            description: req.description,
            consumed_on: req.consumed_on,
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMealRequest {
    pub r#type: Option<MealType>,
    pub description: Option<String>,
    pub consumed_on: Option<NaiveDate>,
}

impl From<UpdateMealRequest> for UpdateMeal {
    fn from(req: UpdateMealRequest) -> Self {
        UpdateMeal {
            r#type: req.r#type.map(|t| t.as_str().to_string()),
            description: req.description,
            consumed_on: req.consumed_on,
        }
    }
}

/// Outgoing meal representation
#[derive(Debug, Clone, Serialize)]
pub struct MealResource {
    pub id: i64,
    pub r#type: Option<MealType>,
    pub description: Option<String>,
    pub consumed_on: NaiveDate,
    pub links: ResourceLinks,
}

impl MealResource {
    pub fn from_row(row: meal::Model, prefix: &str) -> Self {
        let links = ResourceLinks::from([(
            "self".to_string(),
            format!("{}/meal/{}", prefix, row.id),
        )]);

        Self {
            id: row.id,
            r#type: row.r#type.as_deref().and_then(|s| s.parse().ok()),
            description: row.description,
            consumed_on: row.consumed_on,
            links,
        }
    }
}
