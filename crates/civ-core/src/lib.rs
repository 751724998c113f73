//! # civ-core
//!
//! Entity records, declared field lists, identifiers, and error types for the
//! civ validation layer.
//!
//! This crate provides the foundational types shared across all civ crates:
//! - Record structs for organizations, groups, their join records, and statuses
//! - Static per-record field lists with read-only markers
//! - Field-by-field decoding of wire mappings
//! - Foreign-reference declarations for join records
//! - Entity type enum used as the key of existence lookups

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod record;
pub mod references;
