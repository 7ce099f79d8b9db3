//! Outbound gateways to external systems consumed by the domain layer.

pub mod log_source;
