use chrono::NaiveDate;
use mealprepdb_api_types::{PageParams, ResourceLinks};
use mealprepdb_storage::repositories::{
    CreateInventoryLot, InventoryFilters, InventoryLotRow, UpdateInventoryLot,
};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for the inventory lot list endpoint.
///
/// `name` filters match the joined ingredient name.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryListParams {
    pub name: Option<String>,
    #[serde(rename = "name__contains")]
    pub name_contains: Option<String>,
    pub from_where: Option<String>,
    #[serde(rename = "from_where__contains")]
    pub from_where_contains: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    #[serde(rename = "purchased_on__le")]
    pub purchased_on_le: Option<NaiveDate>,
    #[serde(rename = "purchased_on__ge")]
    pub purchased_on_ge: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
    #[serde(rename = "finished_on__le")]
    pub finished_on_le: Option<NaiveDate>,
    #[serde(rename = "finished_on__ge")]
    pub finished_on_ge: Option<NaiveDate>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl InventoryListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self) -> InventoryFilters {
        InventoryFilters {
            name: self.name.clone(),
            name_contains: self.name_contains.clone(),
            from_where: self.from_where.clone(),
            from_where_contains: self.from_where_contains.clone(),
            purchased_on: self.purchased_on,
            purchased_on_le: self.purchased_on_le,
            purchased_on_ge: self.purchased_on_ge,
            finished_on: self.finished_on,
            finished_on_le: self.finished_on_le,
            finished_on_ge: self.finished_on_ge,
        }
    }
}

impl Validate for InventoryListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload; the purchase date defaults to today when omitted
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInventoryLotRequest {
    pub ingredient_id: i64,
    pub from_where: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
}

impl From<CreateInventoryLotRequest> for CreateInventoryLot {
    fn from(req: CreateInventoryLotRequest) -> Self {
        CreateInventoryLot {
            ingredient_id: req.ingredient_id,
            from_where: req.from_where,
            brand: req.brand,
            price: req.price,
            quantity: req.quantity,
            unit: req.unit,
            purchased_on: req.purchased_on,
            finished_on: req.finished_on,
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInventoryLotRequest {
    pub ingredient_id: Option<i64>,
    pub from_where: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
}

impl From<UpdateInventoryLotRequest> for UpdateInventoryLot {
    fn from(req: UpdateInventoryLotRequest) -> Self {
        UpdateInventoryLot {
            ingredient_id: req.ingredient_id,
            from_where: req.from_where,
            brand: req.brand,
            price: req.price,
            quantity: req.quantity,
            unit: req.unit,
            purchased_on: req.purchased_on,
            finished_on: req.finished_on,
        }
    }
}

/// Outgoing inventory lot representation
#[derive(Debug, Clone, Serialize)]
pub struct InventoryLotResource {
    pub id: i64,
    /// Ingredient name
    pub name: String,
    pub ingredient_id: i64,
    pub from_where: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub finished_on: Option<NaiveDate>,
    pub links: ResourceLinks,
}

impl InventoryLotResource {
    pub fn from_row(row: InventoryLotRow, prefix: &str) -> Self {
        let links = ResourceLinks::from([
            (
                "self".to_string(),
                format!("{}/ingredient_in_inventory/{}", prefix, row.id),
            ),
            (
                "ingredient".to_string(),
                format!("{}/ingredient/{}", prefix, row.ingredient_id),
            ),
            (
                "ingredient_meal".to_string(),
                format!("{}/ingredient_in_inventory/{}/meal/", prefix, row.id),
            ),
        ]);

        Self {
            id: row.id,
            name: row.name,
            ingredient_id: row.ingredient_id,
            from_where: row.from_where,
            brand: row.brand,
            price: row.price,
            quantity: row.quantity,
            unit: row.unit,
            purchased_on: row.purchased_on,
            finished_on: row.finished_on,
            links,
        }
    }
}
