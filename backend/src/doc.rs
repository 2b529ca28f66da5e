//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the login, dashboard, and health endpoints together
//! with the schema wrappers from [`crate::inbound::http::schemas`], which keep
//! the domain types free of utoipa derives.
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::dashboard::RedirectBody;
use crate::inbound::http::schemas::{
    AppointmentSchema, AppointmentStatusSchema, AvailabilitySlotSchema, DashboardViewModelSchema,
    EarningsSummarySchema, ErrorCodeSchema, ErrorSchema, PayoutSchema, PayoutStatusSchema,
    SlotStatusSchema,
};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Doctor dashboard API",
        description = "Session-authenticated doctor dashboard and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::dashboard::get_doctor_dashboard,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LoginRequest,
        RedirectBody,
        ErrorSchema,
        ErrorCodeSchema,
        DashboardViewModelSchema,
        AppointmentSchema,
        AppointmentStatusSchema,
        AvailabilitySlotSchema,
        SlotStatusSchema,
        EarningsSummarySchema,
        PayoutSchema,
        PayoutStatusSchema,
    )),
    tags(
        (name = "session", description = "Session bootstrap"),
        (name = "dashboard", description = "Doctor dashboard data"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
