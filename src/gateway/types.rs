//! Gateway boundary types
//!
//! Query parameter deserialization, boundary validation, and the two-valued
//! error taxonomy of this API: validation errors (422) and not-found (404).
//! Error bodies follow the `{"detail": "..."}` shape the API has always used.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

use crate::catalog::{CatalogError, HotelSort, SearchFilter};

/// Query parameters for `GET /hotels`.
///
/// `lat`, `lng` and `radius` are accepted for forward compatibility but have
/// no effect on results in this MVP (distance is not computed).
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free text query on name/description
    pub q: Option<String>,
    /// Latitude for search center (accepted, not applied)
    pub lat: Option<f64>,
    /// Longitude for search center (accepted, not applied)
    pub lng: Option<f64>,
    /// Search radius in meters (accepted, not applied)
    #[serde(default = "default_radius")]
    pub radius: u32,
    /// Cuisine to filter
    pub cuisine: Option<String>,
    /// Minimum rating threshold, 0 to 5
    pub rating_min: Option<f64>,
    /// Sort order: distance | rating | popularity
    pub sort: Option<String>,
}

fn default_radius() -> u32 {
    5000
}

impl SearchParams {
    /// Boundary validation, applied before the query logic runs.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(rating_min) = self.rating_min {
            if !(0.0..=5.0).contains(&rating_min) {
                return Err(ApiError::validation(format!(
                    "ratingMin must be between 0 and 5, got {rating_min}"
                )));
            }
        }
        Ok(())
    }

    /// Filter predicates for the catalog query.
    pub fn filter(&self) -> SearchFilter {
        SearchFilter {
            q: self.q.clone(),
            cuisine: self.cuisine.clone(),
            rating_min: self.rating_min,
        }
    }

    /// Requested sort order (unknown values mean "keep order").
    pub fn sort(&self) -> HotelSort {
        HotelSort::parse(self.sort.as_deref())
    }
}

/// API boundary errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Referenced hotel id does not exist in the catalog.
    #[error("Hotel not found")]
    NotFound,
    /// Malformed or out-of-range query parameter.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::HotelNotFound => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description
    #[schema(example = "Hotel not found")]
    pub detail: String,
}

/// Payload for the root health/info endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Hotel&MenuService")]
    pub service: &'static str,
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            service: "Hotel&MenuService",
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
