//! Landing Core - Shared record types for the landing page content store.
//!
//! This crate provides the types used across all landing page components:
//! - `content` - Persistence layer (store adapter, collections, repository)
//! - `cli` - Operator tool for seeding and editing content
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed ids, timestamps, and the profile, product and
//!   testimonial records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
