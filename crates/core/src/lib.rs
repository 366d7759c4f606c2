//! Mark Store Core - Shared catalog types.
//!
//! This crate provides the types used across all Mark Store components:
//! - `storefront` - JSON API server holding the in-memory catalog
//! - `cli` - Command-line tools for seeding checks and catalog curation
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP clients.
//! The server and the CLI share these records so both sides of the wire
//! agree on field names and formats.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Entity records (users, categories, products, reviews) and
//!   their create/update inputs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
