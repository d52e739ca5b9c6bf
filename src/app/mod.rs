//! Application core — pure widget logic, zero platform I/O.
//!
//! This module wires the resolver into a refresh cycle: read shared
//! storage, resolve, paint.  All interaction with the platform happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without a phone.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
