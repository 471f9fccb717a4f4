//! Shared model types for the demo handlers.
//!
//! Instances are deserialized from body sections that already passed JSON
//! Schema validation, so construction cannot fail on well-declared routes.
//! Optional fields serialize as `null` when absent, mirroring the schemas'
//! nullable declarations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A basic item. The constrained variant used by `/body-field/{item_id}`
/// shares this shape; its tighter rules live in the schema, not the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub name: String,
}

/// Item extended with a set of unique tags and an optional embedded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub items: Vec<NestedItem>,
}
