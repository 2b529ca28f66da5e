//! Doctor dashboard handler.
//!
//! ```text
//! GET /api/v1/doctor/dashboard
//! ```
//!
//! Authorised doctors receive the aggregated view model. Everyone else gets a
//! `303 See Other` pointing at the page they must visit first.

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Aggregation, DashboardPage, RedirectTarget};
use crate::inbound::http::error::PRIVATE_NO_STORE;
use crate::inbound::http::schemas::{DashboardViewModelSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Response header reporting whether every data source answered.
pub const DASHBOARD_STATUS_HEADER: &str = "Dashboard-Status";

/// Body returned alongside a redirect.
///
/// Example JSON: `{"redirectTo":"/doctor/verification"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedirectBody {
    #[schema(example = "/onboarding")]
    pub redirect_to: String,
}

impl From<RedirectTarget> for RedirectBody {
    fn from(target: RedirectTarget) -> Self {
        Self {
            redirect_to: target.path().to_owned(),
        }
    }
}

/// Value of the [`DASHBOARD_STATUS_HEADER`] for an aggregation.
fn dashboard_status(aggregation: &Aggregation) -> &'static str {
    if aggregation.outcome.is_degraded() {
        "degraded"
    } else {
        "complete"
    }
}

fn redirect_response(target: RedirectTarget) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, target.path()))
        .insert_header((header::CACHE_CONTROL, PRIVATE_NO_STORE))
        .json(RedirectBody::from(target))
}

fn dashboard_response(aggregation: &Aggregation) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((DASHBOARD_STATUS_HEADER, dashboard_status(aggregation)))
        .insert_header((header::CACHE_CONTROL, PRIVATE_NO_STORE))
        .json(&aggregation.view_model)
}

/// Render the doctor dashboard for the signed-in caller.
#[utoipa::path(
    get,
    path = "/api/v1/doctor/dashboard",
    responses(
        (
            status = 200,
            description = "Dashboard data",
            body = DashboardViewModelSchema,
            headers(("Dashboard-Status" = String, description = "complete or degraded"))
        ),
        (
            status = 303,
            description = "Caller must complete onboarding or verification first",
            body = RedirectBody,
            headers(("Location" = String, description = "Redirect target"))
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dashboard"],
    operation_id = "getDoctorDashboard"
)]
#[get("/doctor/dashboard")]
pub async fn get_doctor_dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> HttpResponse {
    let request_session = session.request_session();
    match state.dashboard.render_dashboard(&request_session).await {
        DashboardPage::Redirect(target) => redirect_response(target),
        DashboardPage::Dashboard(aggregation) => dashboard_response(&aggregation),
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
