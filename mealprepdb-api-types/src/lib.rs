//! Shared API types for the mealprepdb REST API
//!
//! This crate provides the type definitions shared between the storage and
//! web layers: the closed enum vocabularies, pagination types, and the
//! resource link map used by outgoing representations.

pub mod enums;
pub mod pagination;

use std::collections::BTreeMap;

// Re-export main types for convenience
pub use enums::{EnumParseError, IngredientType, MealType};
pub use pagination::{next_page_url, ListResponse, PageError, PageParams};

/// Map of related-resource URIs keyed by relation name.
///
/// Ordered so serialized links are deterministic.
pub type ResourceLinks = BTreeMap<String, String>;
