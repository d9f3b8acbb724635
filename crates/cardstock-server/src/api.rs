//! HTTP surface of the lookup service.
//!
//! One resource: `GET /api/v1/lookup/{sku}` runs the search-and-normalize
//! pipeline and returns the flat [`ProductRecord`] JSON. The route is
//! consumed from browser clients on other origins, so CORS is permissive.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use cardstock_core::{clean_sku, ProductRecord};
use cardstock_search::{SearchError, StockTrackClient};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<StockTrackClient>,
}

/// Flat error body, matching what card-generator clients expect:
/// `{"error": "...", "sku": "..."}` with `sku` only on not-found responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn invalid_sku() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: "invalid SKU".to_string(),
                sku: None,
            },
        }
    }

    fn product_not_found(sku: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                error: "product not found".to_string(),
                sku: Some(sku),
            },
        }
    }

    fn upstream_failure() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            body: ErrorBody {
                error: "failed to fetch product data".to_string(),
                sku: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/lookup/{sku}", get(lookup_product))
        .layer(build_cors())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

/// Looks up a product by SKU and returns the normalized record.
///
/// The path segment is digit-filtered before it reaches the search provider;
/// a segment with no digits at all is a 400, never an upstream call.
async fn lookup_product(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<ProductRecord>, ApiError> {
    let digits = clean_sku(&sku);
    if digits.is_empty() {
        return Err(ApiError::invalid_sku());
    }

    match state.client.lookup(&digits).await {
        Ok(record) => Ok(Json(record)),
        Err(SearchError::ProductNotFound { sku }) => Err(ApiError::product_not_found(sku)),
        Err(SearchError::NotFound { url }) => {
            // The provider 404s the whole endpoint for some unknown SKUs;
            // clients see the same not-found outcome either way.
            tracing::warn!(%url, sku = %digits, "search endpoint returned 404");
            Err(ApiError::product_not_found(digits))
        }
        Err(err) => {
            tracing::error!(error = %err, sku = %digits, "product lookup failed");
            Err(ApiError::upstream_failure())
        }
    }
}
