//! Doctor records outbound adapters.
//!
//! This module provides a thin HTTP implementation of the four dashboard
//! data-source ports against the records service.

mod http_source;

pub use http_source::DoctorRecordsHttpSource;
