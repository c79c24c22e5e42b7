//! `civiport-core` — shared foundation for the admin client.
//!
//! This crate holds the error taxonomy and client-side field validation.
//! It is pure: no IO, no transport concerns.

pub mod error;
pub mod validation;

pub use error::{PortalError, PortalResult};
