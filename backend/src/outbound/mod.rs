//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **records**: reqwest-backed client for the doctor records service,
//!   serving the appointments, availability, earnings, and payouts ports.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod records;
