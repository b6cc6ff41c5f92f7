use chrono::NaiveDate;
use mealprepdb_api_types::{PageParams, ResourceLinks};
use mealprepdb_storage::entities::dish;
use mealprepdb_storage::repositories::{CreateDish, DishFilters, UpdateDish};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for the dish list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DishListParams {
    pub name: Option<String>,
    #[serde(rename = "name__contains")]
    pub name_contains: Option<String>,
    pub created_on: Option<NaiveDate>,
    #[serde(rename = "created_on__le")]
    pub created_on_le: Option<NaiveDate>,
    #[serde(rename = "created_on__ge")]
    pub created_on_ge: Option<NaiveDate>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl DishListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self) -> DishFilters {
        DishFilters {
            name: self.name.clone(),
            name_contains: self.name_contains.clone(),
            created_on: self.created_on,
            created_on_le: self.created_on_le,
            created_on_ge: self.created_on_ge,
        }
    }
}

impl Validate for DishListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload; the creation date defaults to today when omitted
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDishRequest {
    pub name: String,
    pub parent_dish_id: Option<i64>,
    pub created_on: Option<NaiveDate>,
}

impl From<CreateDishRequest> for CreateDish {
    fn from(req: CreateDishRequest) -> Self {
        CreateDish {
            name: req.name,
            parent_dish_id: req.parent_dish_id,
            created_on: req.created_on,
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDishRequest {
    pub name: Option<String>,
    pub parent_dish_id: Option<i64>,
    pub created_on: Option<NaiveDate>,
}

impl From<UpdateDishRequest> for UpdateDish {
    fn from(req: UpdateDishRequest) -> Self {
        UpdateDish {
            name: req.name,
            parent_dish_id: req.parent_dish_id,
            created_on: req.created_on,
        }
    }
}

/// Outgoing dish representation
#[derive(Debug, Clone, Serialize)]
pub struct DishResource {
    pub id: i64,
    pub name: String,
    pub parent_dish_id: Option<i64>,
    pub created_on: Option<NaiveDate>,
    pub links: ResourceLinks,
}

impl DishResource {
    pub fn from_row(row: dish::Model, prefix: &str) -> Self {
        let links = ResourceLinks::from([
            ("self".to_string(), format!("{}/dish/{}", prefix, row.id)),
            (
                "dish_ingredient".to_string(),
                format!("{}/dish/{}/ingredient/", prefix, row.id),
            ),
            (
                "dish_meal".to_string(),
                format!("{}/dish/{}/meal/", prefix, row.id),
            ),
        ]);

        Self {
            id: row.id,
            name: row.name,
            parent_dish_id: row.parent_dish_id,
            created_on: row.created_on,
            links,
        }
    }
}
