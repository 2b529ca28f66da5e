//! Domain primitives and services.
//!
//! Purpose: define the transport-agnostic types and use-cases behind the
//! doctor dashboard. Adapters depend on this module; it never depends on
//! them.
//!
//! Public surface:
//! - Error, ErrorCode: failure payload shared by every adapter.
//! - Caller, CallerId, Role, VerificationStatus: identity facts used for
//!   authorisation.
//! - DashboardViewModel and the record types it aggregates.
//! - SessionResolver, DashboardAggregator, DoctorDashboardService: the
//!   authorise-then-aggregate flow.

pub mod auth;
pub mod caller;
pub mod dashboard;
pub mod dashboard_aggregator;
pub mod doctor_dashboard;
pub mod error;
pub mod ports;
pub mod session_resolver;
pub mod trace_id;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::caller::{Caller, CallerId, CallerIdValidationError, Role, VerificationStatus};
pub use self::dashboard::{
    Appointment, AppointmentStatus, AppointmentsPayload, AvailabilityPayload, AvailabilitySlot,
    DashboardSource, DashboardViewModel, EarningsPayload, EarningsSummary, Payout, PayoutStatus,
    PayoutsPayload, SlotStatus,
};
pub use self::dashboard_aggregator::{
    Aggregation, AggregationOutcome, DashboardAggregator, DashboardSources, JoinPolicy,
    ParseJoinPolicyError,
};
pub use self::doctor_dashboard::{DashboardPage, DoctorDashboardService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::session_resolver::{RedirectTarget, RequestSession, Resolution, SessionResolver};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
