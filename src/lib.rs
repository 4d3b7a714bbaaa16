//! Ridgeback cooling controller library.
//!
//! Maps charger state and commanded velocity onto the base's six fans and
//! publishes the full bank after every inbound message.  The decision
//! table lives in [`cooling`]; [`app`] wraps it behind port traits so the
//! outer adapters and the message transport stay replaceable.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod bus;
pub mod config;
pub mod cooling;
pub mod error;
pub mod fans;
pub mod messages;
pub mod replay;
