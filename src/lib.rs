//! PetWidget library.
//!
//! Resolves the pet identifier and message a host app leaves in shared
//! storage into a [`DisplayDecision`](resolver::DisplayDecision), and paints
//! it onto Android- and iOS-shaped widget surfaces through port traits.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;

pub use resolver::{DisplayDecision, resolve};
