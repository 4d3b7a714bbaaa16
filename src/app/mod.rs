//! Application core — pure cooling logic, zero I/O.
//!
//! This module wraps the fan decision table in a service that the outer
//! adapters drive.  All interaction with the message bus happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a live transport.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
