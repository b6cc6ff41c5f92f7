use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Liveness plus a database ping
pub async fn health_check(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    let status = match ctx.db.ping().await {
        Ok(()) => "healthy",
        Err(err) => {
            tracing::error!("database ping failed: {}", err);
            "unhealthy"
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
