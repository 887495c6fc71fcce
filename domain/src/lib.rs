//! This module re-exports various items from the `entity_api` crate.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate.
pub use entity_api::{companies, roles, status, users, Id};

pub mod company_contact;
pub mod error;
