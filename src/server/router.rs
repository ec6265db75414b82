use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        appointment::{self, APPOINTMENT_TAG},
        auth::{self, AUTH_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dental Appointment API",
        description = "Scheduling of dental appointments with bearer token authentication"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = APPOINTMENT_TAG, description = "Appointment scheduling"),
        (name = AUTH_TAG, description = "Registration, login and roles")
    )
)]
struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with OpenAPI documentation served under `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            appointment::create_appointment,
            appointment::get_all_appointments
        ))
        .routes(routes!(
            appointment::get_appointment,
            appointment::update_appointment,
            appointment::delete_appointment
        ))
        .routes(routes!(appointment::get_appointments_by_patient_name))
        .routes(routes!(appointment::get_appointments_by_dentist))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::create_role))
        .routes(routes!(auth::assign_role))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
