use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use realty::catalog::{
    seed_properties, serialize_document, Inquiry, SearchCriteria, INQUIRIES, PROPERTIES,
};
use realty::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::infra::AppState;

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/properties", get(list_properties))
        .route("/api/properties/featured", get(featured_properties))
        .route("/api/properties/:id", get(property_by_id))
        .route("/api/setup/seed", post(seed_endpoint))
        .route("/api/inquiries", post(create_inquiry))
        .with_state(state)
}

/// Query parameters accepted by the listing search.
///
/// Mirrors [`SearchCriteria`] but validates numeric bounds before the
/// criteria reach the core.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    city: Option<String>,
    property_type: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    bedrooms: Option<u32>,
    bathrooms: Option<f64>,
    q: Option<String>,
    featured: Option<bool>,
}

impl ListQuery {
    fn into_criteria(self) -> Result<SearchCriteria, AppError> {
        for (name, value) in [
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("bathrooms", self.bathrooms),
        ] {
            if value.is_some_and(|bound| bound < 0.0) {
                return Err(AppError::Validation(format!("{name} must be non-negative")));
            }
        }

        Ok(SearchCriteria {
            city: self.city,
            property_type: self.property_type,
            min_price: self.min_price,
            max_price: self.max_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            q: self.q,
            featured: self.featured,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SeedResult {
    pub(crate) inserted: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct InquiryResult {
    pub(crate) success: bool,
}

pub(crate) async fn root() -> Json<Value> {
    Json(json!({ "message": "Property catalog service is running" }))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Map<String, Value>>>, AppError> {
    let criteria = query.into_criteria()?;
    let documents = state
        .catalog
        .list(PROPERTIES, &criteria.to_predicate())
        .await;
    Ok(Json(documents.iter().map(serialize_document).collect()))
}

pub(crate) async fn featured_properties(
    State(state): State<AppState>,
) -> Json<Vec<Map<String, Value>>> {
    let predicate = SearchCriteria::featured_only().to_predicate();
    let documents = state.catalog.list(PROPERTIES, &predicate).await;
    Json(documents.iter().map(serialize_document).collect())
}

pub(crate) async fn property_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Map<String, Value>>, AppError> {
    let document = state.catalog.get_by_id(PROPERTIES, &id).await?;
    Ok(Json(serialize_document(&document)))
}

pub(crate) async fn seed_endpoint(
    State(state): State<AppState>,
) -> Result<Json<SeedResult>, AppError> {
    let inserted = seed_properties(&state.catalog).await?;
    Ok(Json(SeedResult { inserted }))
}

pub(crate) async fn create_inquiry(
    State(state): State<AppState>,
    Json(inquiry): Json<Inquiry>,
) -> Result<Json<InquiryResult>, AppError> {
    validate_inquiry(&inquiry)?;
    state.catalog.create(INQUIRIES, &inquiry).await?;
    Ok(Json(InquiryResult { success: true }))
}

fn validate_inquiry(inquiry: &Inquiry) -> Result<(), AppError> {
    for (name, value) in [
        ("name", &inquiry.name),
        ("email", &inquiry.email),
        ("message", &inquiry.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} must not be blank")));
        }
    }
    Ok(())
}
