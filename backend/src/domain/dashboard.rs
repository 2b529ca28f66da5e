//! Dashboard records and the aggregated view model.
//!
//! The record types mirror what the appointments, availability, earnings, and
//! payouts collaborators return. This service never computes or persists
//! them; it only forwards them into a [`DashboardViewModel`].
//!
//! Money is carried in integer minor units (cents) to keep values exact.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a booked appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    /// Booked and upcoming.
    Scheduled,
    /// The consultation took place.
    Completed,
    /// Cancelled by either party.
    Cancelled,
}

/// Appointment booked with the doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Appointment identifier assigned by the scheduling service.
    pub id: String,
    /// Patient the appointment is booked for.
    pub patient_id: String,
    /// Consultation start.
    pub start_time: DateTime<Utc>,
    /// Consultation end.
    pub end_time: DateTime<Utc>,
    /// Current lifecycle state.
    pub status: AppointmentStatus,
    /// Free-text notes left at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Booking state of an availability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    /// Open for booking.
    Available,
    /// Taken by an appointment.
    Booked,
    /// Withheld by the doctor.
    Blocked,
}

/// Window of time the doctor offers for appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    /// Slot identifier.
    pub id: String,
    /// Start of the offered window.
    pub start_time: DateTime<Utc>,
    /// End of the offered window.
    pub end_time: DateTime<Utc>,
    /// Whether the slot can still be booked.
    pub status: SlotStatus,
}

/// Earnings figures computed by the earnings collaborator.
///
/// Every field is optional so the empty summary serialises as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    /// Lifetime earnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_earnings_cents: Option<u64>,
    /// Earnings in the current calendar month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub this_month_earnings_cents: Option<u64>,
    /// Appointments marked completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_appointments: Option<u32>,
    /// Mean monthly earnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_earnings_per_month_cents: Option<u64>,
    /// Credits not yet paid out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_credits: Option<u32>,
    /// Amount the doctor can request now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_payout_cents: Option<u64>,
}

impl EarningsSummary {
    /// Whether no figure is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Processing state of a payout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    /// Requested and awaiting settlement.
    Processing,
    /// Settled to the doctor.
    Processed,
}

/// Payout requested by the doctor against earned credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    /// Payout identifier.
    pub id: String,
    /// Credits redeemed by this payout.
    pub credits: u32,
    /// Gross amount before the platform fee.
    pub amount_cents: u64,
    /// Fee retained by the platform.
    pub platform_fee_cents: u64,
    /// Amount paid out to the doctor.
    pub net_amount_cents: u64,
    /// Settlement state.
    pub status: PayoutStatus,
    /// When the payout was requested.
    pub created_at: DateTime<Utc>,
    /// When the payout settled, once it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Read a panel field, treating an explicit `null` like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Appointments collaborator response: `{ "appointments": [...] }`.
///
/// A missing or `null` list decodes as an empty panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentsPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointments: Vec<Appointment>,
}

/// Availability collaborator response: `{ "slots": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Vec<AvailabilitySlot>,
}

/// Earnings collaborator response: `{ "earnings": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub earnings: EarningsSummary,
}

/// Payouts collaborator response: `{ "payouts": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutsPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub payouts: Vec<Payout>,
}

/// The four collaborators feeding the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSource {
    /// Booked appointments.
    Appointments,
    /// Offered availability slots.
    Availability,
    /// Earnings summary.
    Earnings,
    /// Payout history.
    Payouts,
}

impl DashboardSource {
    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Appointments => "appointments",
            Self::Availability => "availability",
            Self::Earnings => "earnings",
            Self::Payouts => "payouts",
        }
    }
}

impl fmt::Display for DashboardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renderable dashboard data handed to the presentation layer.
///
/// ## Invariants
/// - Always fully populated; a failed source contributes its empty default.
/// - Immutable once built.
///
/// # Examples
/// ```
/// use doctor_dashboard::domain::DashboardViewModel;
///
/// let empty = DashboardViewModel::default();
/// assert!(empty.appointments().is_empty());
/// assert!(empty.earnings().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardViewModel {
    appointments: Vec<Appointment>,
    slots: Vec<AvailabilitySlot>,
    earnings: EarningsSummary,
    payouts: Vec<Payout>,
}

impl DashboardViewModel {
    /// Assemble a view model from the four collaborator payloads.
    pub fn from_payloads(
        appointments: AppointmentsPayload,
        availability: AvailabilityPayload,
        earnings: EarningsPayload,
        payouts: PayoutsPayload,
    ) -> Self {
        Self {
            appointments: appointments.appointments,
            slots: availability.slots,
            earnings: earnings.earnings,
            payouts: payouts.payouts,
        }
    }

    /// Appointments panel content.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Availability panel content.
    pub fn slots(&self) -> &[AvailabilitySlot] {
        &self.slots
    }

    /// Earnings panel summary.
    pub fn earnings(&self) -> &EarningsSummary {
        &self.earnings
    }

    /// Payout history shown alongside earnings.
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_view_model_serialises_to_empty_panels() {
        let value = serde_json::to_value(DashboardViewModel::default()).expect("serialise");
        assert_eq!(
            value,
            json!({ "appointments": [], "slots": [], "earnings": {}, "payouts": [] })
        );
    }

    #[rstest]
    fn earnings_payload_accepts_empty_object() {
        let payload: EarningsPayload =
            serde_json::from_value(json!({ "earnings": {} })).expect("earnings payload");
        assert!(payload.earnings.is_empty());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "appointments": null }))]
    fn appointments_payload_tolerates_absent_list(#[case] body: serde_json::Value) {
        let payload: AppointmentsPayload = serde_json::from_value(body).expect("decodes");
        assert!(payload.appointments.is_empty());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "slots": null }))]
    fn availability_payload_tolerates_absent_list(#[case] body: serde_json::Value) {
        let payload: AvailabilityPayload = serde_json::from_value(body).expect("decodes");
        assert!(payload.slots.is_empty());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "earnings": null }))]
    fn earnings_payload_tolerates_absent_summary(#[case] body: serde_json::Value) {
        let payload: EarningsPayload = serde_json::from_value(body).expect("decodes");
        assert!(payload.earnings.is_empty());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "payouts": null }))]
    fn payouts_payload_tolerates_absent_list(#[case] body: serde_json::Value) {
        let payload: PayoutsPayload = serde_json::from_value(body).expect("decodes");
        assert!(payload.payouts.is_empty());
    }

    #[rstest]
    fn wrongly_typed_panel_is_still_rejected() {
        let result = serde_json::from_value::<PayoutsPayload>(json!({ "payouts": 7 }));
        assert!(result.is_err());
    }

    #[rstest]
    fn appointments_payload_decodes_camel_case_records() {
        let payload: AppointmentsPayload = serde_json::from_value(json!({
            "appointments": [{
                "id": "a1",
                "patientId": "p1",
                "startTime": "2026-10-20T09:00:00Z",
                "endTime": "2026-10-20T09:30:00Z",
                "status": "SCHEDULED"
            }]
        }))
        .expect("appointments payload");

        let appointment = payload.appointments.first().expect("one appointment");
        assert_eq!(appointment.patient_id, "p1");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert!(appointment.notes.is_none());
    }

    #[rstest]
    #[case(DashboardSource::Appointments, "appointments")]
    #[case(DashboardSource::Availability, "availability")]
    #[case(DashboardSource::Earnings, "earnings")]
    #[case(DashboardSource::Payouts, "payouts")]
    fn source_labels_are_stable(#[case] source: DashboardSource, #[case] label: &str) {
        assert_eq!(source.to_string(), label);
    }
}
