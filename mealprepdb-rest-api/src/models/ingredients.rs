use mealprepdb_api_types::{IngredientType, PageParams, ResourceLinks};
use mealprepdb_storage::entities::ingredient;
use mealprepdb_storage::repositories::{CreateIngredient, IngredientFilters, UpdateIngredient};
use mealprepdb_web::{Validate, WebError};
use serde::{Deserialize, Serialize};

/// Query parameters for the ingredient list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientListParams {
    pub name: Option<String>,
    #[serde(rename = "name__contains")]
    pub name_contains: Option<String>,
    pub r#type: Option<IngredientType>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl IngredientListParams {
    pub fn page(&self) -> PageParams {
        PageParams {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filters(&self) -> IngredientFilters {
        IngredientFilters {
            name: self.name.clone(),
            name_contains: self.name_contains.clone(),
            r#type: self.r#type.map(|t| t.as_str().to_string()),
        }
    }
}

impl Validate for IngredientListParams {
    fn validate(&self) -> Result<(), WebError> {
        self.page().validate()?;
        Ok(())
    }
}

/// Create payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    pub r#type: Option<IngredientType>,
}

impl From<CreateIngredientRequest> for CreateIngredient {
    fn from(req: CreateIngredientRequest) -> Self {
        CreateIngredient {
            name: req.name,
            r#type: req.r#type.map(|t| t.as_str().to_string()),
        }
    }
}

/// Partial update payload; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub r#type: Option<IngredientType>,
}

impl From<UpdateIngredientRequest> for UpdateIngredient {
    fn from(req: UpdateIngredientRequest) -> Self {
        UpdateIngredient {
            name: req.name,
            r#type: req.r#type.map(|t| t.as_str().to_string()),
        }
    }
}

/// Outgoing ingredient representation
#[derive(Debug, Clone, Serialize)]
pub struct IngredientResource {
    pub id: i64,
    pub name: String,
    pub r#type: Option<IngredientType>,
    pub links: ResourceLinks,
}

impl IngredientResource {
    pub fn from_row(row: ingredient::Model, prefix: &str) -> Self {
        let links = ResourceLinks::from([(
            "self".to_string(),
            format!("{}/ingredient/{}", prefix, row.id),
        )]);

        Self {
            id: row.id,
            name: row.name,
            r#type: row.r#type.as_deref().and_then(|s| s.parse().ok()),
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_deserialize_double_underscore_names() {
        let params: IngredientListParams =
            serde_json::from_str(r#"{"name__contains": "on", "type": "spice", "limit": 5}"#)
                .unwrap();
        assert_eq!(params.name_contains.as_deref(), Some("on"));
        assert_eq!(params.r#type, Some(IngredientType::Spice));
        assert_eq!(params.page().limit(), 5);
    }

    #[test]
    fn test_resource_serializes_type_and_links() {
        let row = ingredient::Model {
            id: 3,
            name: "cumin".to_string(),
            r#type: Some("spice".to_string()),
            updated_on: chrono::Utc::now(),
        };
        let resource = IngredientResource::from_row(row, "/v1");
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "spice");
        assert_eq!(json["links"]["self"], "/v1/ingredient/3");
    }
}
