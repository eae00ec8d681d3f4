//! HTTP handlers
//!
//! Thin mappings from the HTTP surface onto the catalog queries. Every
//! handler completes synchronously against the in-memory snapshot; the
//! `async` is only for the framework.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use super::state::AppState;
use super::types::{ApiError, ErrorBody, SearchParams, ServiceInfo};
use crate::catalog::{Hotel, MenuItem};

/// Search hotels
///
/// GET /hotels?q=...&cuisine=...&ratingMin=...&sort=...
///
/// Naive in-memory filters: `q` on name/description, `cuisine` on the cuisine
/// list, `ratingMin` on rating, all combined as a conjunction. `sort` accepts
/// rating | popularity | distance (distance is a documented no-op).
#[utoipa::path(
    get,
    path = "/hotels",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching hotels, possibly empty", body = Vec<Hotel>),
        (status = 422, description = "ratingMin outside [0, 5]", body = ErrorBody)
    ),
    tag = "Hotels"
)]
pub async fn search_hotels(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Hotel>>, ApiError> {
    params.validate()?;

    if params.lat.is_some() || params.lng.is_some() {
        // Geo parameters are accepted for compatibility but not applied
        tracing::debug!(
            lat = ?params.lat,
            lng = ?params.lng,
            radius = params.radius,
            "geo search parameters ignored (distance not computed)"
        );
    }

    let results = state.catalog.search(&params.filter(), params.sort());
    tracing::debug!(matches = results.len(), "hotel search served");
    Ok(Json(results))
}

/// Get hotel by id
///
/// GET /hotels/{hotelId}
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    params(
        ("hotelId" = String, Path, description = "Hotel identifier")
    ),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "Hotel not found", body = ErrorBody)
    ),
    tag = "Hotels"
)]
pub async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Path(hotel_id): Path<String>,
) -> Result<Json<Hotel>, ApiError> {
    let hotel = state.catalog.hotel(&hotel_id)?;
    Ok(Json(hotel.clone()))
}

/// Get menu for a hotel
///
/// GET /hotels/{hotelId}/menu
///
/// Returns an empty array when the hotel exists but has no menu items; 404
/// only when the hotel id itself is unknown.
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}/menu",
    params(
        ("hotelId" = String, Path, description = "Hotel identifier")
    ),
    responses(
        (status = 200, description = "Menu items, possibly empty", body = Vec<MenuItem>),
        (status = 404, description = "Hotel not found", body = ErrorBody)
    ),
    tag = "Menus"
)]
pub async fn get_hotel_menu(
    State(state): State<Arc<AppState>>,
    Path(hotel_id): Path<String>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state.catalog.menu(&hotel_id)?;
    Ok(Json(items.to_vec()))
}

/// Health/info endpoint at the service root. Kept out of the OpenAPI paths.
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;
    use axum::http::{StatusCode, Uri};
    use axum::response::IntoResponse;

    fn test_state() -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(Arc::new(seed_catalog()))))
    }

    fn query(q: &str) -> Query<SearchParams> {
        let uri: Uri = format!("/hotels?{q}").parse().unwrap();
        Query::try_from_uri(&uri).unwrap()
    }

    #[tokio::test]
    async fn search_without_params_returns_all() {
        let Json(hotels) = search_hotels(test_state(), query("")).await.unwrap();
        assert_eq!(hotels.len(), 3);
        assert_eq!(hotels[0].id, "h1");
    }

    #[tokio::test]
    async fn search_rejects_out_of_range_rating_min() {
        let err = search_hotels(test_state(), query("ratingMin=6"))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn search_applies_filters_and_sort() {
        let Json(hotels) = search_hotels(test_state(), query("ratingMin=4.5&sort=rating"))
            .await
            .unwrap();
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["h2", "h1"]);
    }

    #[tokio::test]
    async fn search_ignores_geo_parameters() {
        let Json(with_geo) = search_hotels(test_state(), query("lat=37.7&lng=-122.4&radius=100"))
            .await
            .unwrap();
        let Json(without) = search_hotels(test_state(), query("")).await.unwrap();
        assert_eq!(with_geo, without);
    }

    #[tokio::test]
    async fn get_hotel_by_id() {
        let Json(hotel) = get_hotel(test_state(), Path("h3".to_string()))
            .await
            .unwrap();
        assert_eq!(hotel.name, "Pasta Palace");
    }

    #[tokio::test]
    async fn get_unknown_hotel_is_404() {
        let err = get_hotel(test_state(), Path("h99".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound);

        let err = get_hotel_menu(test_state(), Path("h99".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[tokio::test]
    async fn get_menu_for_hotel() {
        let Json(items) = get_hotel_menu(test_state(), Path("h1".to_string()))
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "m1");
        assert_eq!(items[0].options.len(), 2);
    }

    #[tokio::test]
    async fn root_reports_service_info() {
        let Json(info) = service_info().await;
        assert_eq!(info.service, "Hotel&MenuService");
        assert_eq!(info.status, "ok");
        assert_eq!(info.version, "1.0.0");
    }
}
