//! Error shared by the four dashboard data-source ports.

use super::define_port_error;

define_port_error! {
    /// Failures reported by appointments, availability, earnings, and payouts
    /// adapters. Every variant is absorbed by the dashboard aggregator.
    pub enum DashboardSourceError {
        /// The collaborator could not be reached.
        Transport { message: String } =>
            "dashboard source transport failed: {message}",
        /// The collaborator did not answer in time.
        Timeout { message: String } =>
            "dashboard source timed out: {message}",
        /// The collaborator answered with a non-success status.
        Status { status: u16, message: String } =>
            "dashboard source returned status {status}: {message}",
        /// The collaborator answered with a payload that could not be decoded.
        Decode { message: String } =>
            "dashboard source payload invalid: {message}",
    }
}
