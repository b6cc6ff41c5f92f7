//! Application configuration and router setup

use axum::{middleware, routing::get, Router};
use mealprepdb_storage::DatabaseConnection;
use mealprepdb_web::middleware::{cors_layer, request_id_middleware};
use tower_http::trace::TraceLayer;

use crate::{context::AppContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API path prefix
    pub api_prefix: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/v1".to_string(),
            allowed_origins: vec![
                "http://localhost".to_string(),
                "https://localhost".to_string(),
            ],
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(db: DatabaseConnection, config: AppConfig) -> Router {
    let context = AppContext::new(db, config.api_prefix.clone());

    let mut app = Router::new()
        // Health endpoint lives outside the API prefix
        .route("/health", get(handlers::health_check))
        .nest(&config.api_prefix, create_api_router())
        .with_state(context);

    // Middleware layers, applied in reverse order
    if config.enable_cors {
        app = app.layer(cors_layer(&config.allowed_origins));
    }

    if config.enable_request_id {
        app = app.layer(middleware::from_fn(request_id_middleware));
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

/// API routes. List routes keep their trailing slash; detail routes do not.
fn create_api_router() -> Router<AppContext> {
    Router::new()
        // Ingredient endpoints
        .route(
            "/ingredient/",
            get(handlers::ingredient_list_view).post(handlers::ingredient_create_view),
        )
        .route(
            "/ingredient/{id}",
            get(handlers::ingredient_detail_view).put(handlers::ingredient_update_view),
        )
        // Inventory lot endpoints
        .route(
            "/ingredient_in_inventory/",
            get(handlers::ingredient_in_inventory_list_view)
                .post(handlers::ingredient_in_inventory_create_view),
        )
        .route(
            "/ingredient_in_inventory/{id}",
            get(handlers::ingredient_in_inventory_detail_view)
                .put(handlers::ingredient_in_inventory_update_view),
        )
        .route(
            "/ingredient_in_inventory/{id}/meal/",
            get(handlers::ingredient_meal_list_view),
        )
        // Dish endpoints, with nested dish-scoped listings
        .route(
            "/dish/",
            get(handlers::dish_list_view).post(handlers::dish_create_view),
        )
        .route(
            "/dish/{id}",
            get(handlers::dish_detail_view).put(handlers::dish_update_view),
        )
        .route("/dish/{id}/ingredient/", get(handlers::dish_ingredient_list_view))
        .route("/dish/{id}/meal/", get(handlers::dish_meal_list_view))
        // Dish-ingredient endpoints
        .route(
            "/dish_ingredient/",
            get(handlers::dish_ingredient_collection_view)
                .post(handlers::dish_ingredient_create_view),
        )
        .route(
            "/dish_ingredient/{id}",
            get(handlers::dish_ingredient_detail_view).put(handlers::dish_ingredient_update_view),
        )
        // Meal endpoints
        .route(
            "/meal/",
            get(handlers::meal_list_view).post(handlers::meal_create_view),
        )
        .route(
            "/meal/{id}",
            get(handlers::meal_detail_view).put(handlers::meal_update_view),
        )
        // Meal-dish endpoints
        .route(
            "/meal_dish/",
            get(handlers::meal_dish_collection_view).post(handlers::meal_dish_create_view),
        )
        .route(
            "/meal_dish/{id}",
            get(handlers::meal_dish_detail_view).put(handlers::meal_dish_update_view),
        )
        // Meal-ingredient endpoints
        .route(
            "/meal_ingredient/",
            get(handlers::meal_ingredient_collection_view)
                .post(handlers::meal_ingredient_create_view),
        )
        .route(
            "/meal_ingredient/{id}",
            get(handlers::meal_ingredient_detail_view).put(handlers::meal_ingredient_update_view),
        )
}
