//! Core library for the front-desk reservation service: the booking engine
//! with its HTTP router, plus configuration, error, and telemetry plumbing
//! shared with the API binary.

pub mod booking;
pub mod config;
pub mod error;
pub mod telemetry;
