//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, health, reading_lists};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reading Lists API",
        version = "0.1.0",
        description = "Per-user reading lists of books",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Identity
        auth::login,
        // Reading lists
        reading_lists::create_reading_list,
        reading_lists::read_reading_lists,
        reading_lists::delete_reading_list,
        reading_lists::add_book,
        reading_lists::update_book,
        reading_lists::delete_book,
    ),
    components(
        schemas(
            crate::api::Acknowledgement,
            crate::models::user::LoginResponse,
            crate::models::reading_list::CreateReadingList,
            crate::models::reading_list::ReadingListRef,
            crate::models::reading_list::ReadingListsResponse,
            crate::models::book::BookFields,
            crate::models::book::AddBook,
            crate::models::book::UpdateBook,
            crate::models::book::BookRef,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Identity lookup"),
        (name = "reading_lists", description = "Reading lists and their books")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            // `Authorization: ApiKey <username>:<key>`
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
