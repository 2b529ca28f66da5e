//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A downstream dependency is unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Something went wrong")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "6f1c2b8e-3d0a-4c5e-9f7a-1b2c3d4e5f60")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::AppointmentStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AppointmentStatus)]
pub enum AppointmentStatusSchema {
    #[schema(rename = "SCHEDULED")]
    Scheduled,
    #[schema(rename = "COMPLETED")]
    Completed,
    #[schema(rename = "CANCELLED")]
    Cancelled,
}

/// OpenAPI schema for [`crate::domain::Appointment`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Appointment)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AppointmentSchema {
    #[schema(example = "appt_001")]
    id: String,
    #[schema(example = "patient_demo")]
    patient_id: String,
    #[schema(value_type = String, format = DateTime)]
    start_time: String,
    #[schema(value_type = String, format = DateTime)]
    end_time: String,
    status: AppointmentStatusSchema,
    notes: Option<String>,
}

/// OpenAPI schema for [`crate::domain::SlotStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SlotStatus)]
pub enum SlotStatusSchema {
    #[schema(rename = "AVAILABLE")]
    Available,
    #[schema(rename = "BOOKED")]
    Booked,
    #[schema(rename = "BLOCKED")]
    Blocked,
}

/// OpenAPI schema for [`crate::domain::AvailabilitySlot`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AvailabilitySlot)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AvailabilitySlotSchema {
    id: String,
    #[schema(value_type = String, format = DateTime)]
    start_time: String,
    #[schema(value_type = String, format = DateTime)]
    end_time: String,
    status: SlotStatusSchema,
}

/// OpenAPI schema for [`crate::domain::EarningsSummary`].
///
/// Every figure is optional; a failed earnings source yields `{}`.
#[derive(ToSchema)]
#[schema(as = crate::domain::EarningsSummary)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EarningsSummarySchema {
    #[schema(example = 125000)]
    total_earnings_cents: Option<u64>,
    this_month_earnings_cents: Option<u64>,
    completed_appointments: Option<u32>,
    average_earnings_per_month_cents: Option<u64>,
    available_credits: Option<u32>,
    available_payout_cents: Option<u64>,
}

/// OpenAPI schema for [`crate::domain::PayoutStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PayoutStatus)]
pub enum PayoutStatusSchema {
    #[schema(rename = "PROCESSING")]
    Processing,
    #[schema(rename = "PROCESSED")]
    Processed,
}

/// OpenAPI schema for [`crate::domain::Payout`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Payout)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PayoutSchema {
    id: String,
    credits: u32,
    amount_cents: u64,
    platform_fee_cents: u64,
    net_amount_cents: u64,
    status: PayoutStatusSchema,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = Option<String>, format = DateTime)]
    processed_at: Option<String>,
}

/// OpenAPI schema for [`crate::domain::DashboardViewModel`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DashboardViewModel)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DashboardViewModelSchema {
    appointments: Vec<AppointmentSchema>,
    slots: Vec<AvailabilitySlotSchema>,
    earnings: EarningsSummarySchema,
    payouts: Vec<PayoutSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("message"));
        assert!(schema_json.contains("traceId"));
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("unauthorized")]
    #[case("forbidden")]
    #[case("not_found")]
    #[case("service_unavailable")]
    #[case("internal_error")]
    fn error_code_schema_variants_match_domain(#[case] code: &str) {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert!(schema_json.contains(code), "missing {code}");
    }

    #[rstest]
    fn dashboard_schema_lists_every_panel() {
        let schema_json = schema_to_json::<DashboardViewModelSchema>();
        assert_eq!(
            DashboardViewModelSchema::name(),
            "crate.domain.DashboardViewModel"
        );
        for panel in ["appointments", "slots", "earnings", "payouts"] {
            assert!(schema_json.contains(panel), "missing {panel}");
        }
    }

    #[rstest]
    fn appointment_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<AppointmentSchema>();
        assert!(schema_json.contains("patientId"));
        assert!(schema_json.contains("startTime"));
    }
}
