//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`
//!
//! The root health/info endpoint is intentionally absent from the paths.

use utoipa::OpenApi;

use crate::catalog::{Address, GeoPoint, Hotel, MenuItem, MenuOption, MenuOptionChoice};
use crate::gateway::types::{ErrorBody, ServiceInfo};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel & Menu Service API",
        version = "1.0.0",
        description = "Manages hotel discovery, details, and menus.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::search_hotels,
        crate::gateway::handlers::get_hotel,
        crate::gateway::handlers::get_hotel_menu,
    ),
    components(
        schemas(
            GeoPoint,
            Address,
            Hotel,
            MenuOptionChoice,
            MenuOption,
            MenuItem,
            ErrorBody,
            ServiceInfo,
        )
    ),
    tags(
        (name = "Hotels", description = "Hotel discovery and details"),
        (name = "Menus", description = "Menu browsing for hotels")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Hotel & Menu Service API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Hotel & Menu Service API"));
    }

    #[test]
    fn catalog_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/hotels"));
        assert!(paths.paths.contains_key("/hotels/{hotelId}"));
        assert!(paths.paths.contains_key("/hotels/{hotelId}/menu"));
        // Root info endpoint stays out of the schema
        assert!(!paths.paths.contains_key("/"));
    }
}
