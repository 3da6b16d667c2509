// Copyright 2025 ProximaDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Record Model
//!
//! Describes how the logical properties of a record type map onto the fields
//! of a stored document. A model is built once and then shared read-only by
//! every filter translation.

pub mod builder;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::FilterError;

pub use builder::{PropertyDefinitionSpec, RecordDefinition, RecordModelBuilder};

/// Storage name MongoDB reserves for the document key
pub const MONGO_KEY_FIELD: &str = "_id";

/// Role a property plays in the stored record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyRole {
    Key,
    Data,
    Vector,
}

/// A single property of a record type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyDefinition {
    /// Name used by application code and by filter clauses
    pub logical_name: String,

    /// Name of the field in the persisted document and in native queries
    pub storage_name: String,

    pub role: PropertyRole,
}

impl PropertyDefinition {
    pub fn new(
        logical_name: impl Into<String>,
        storage_name: impl Into<String>,
        role: PropertyRole,
    ) -> Self {
        Self {
            logical_name: logical_name.into(),
            storage_name: storage_name.into(),
            role,
        }
    }
}

/// Immutable, ordered description of a record type.
///
/// Instances are produced by [`RecordModelBuilder`], which guarantees that
/// logical names and storage names are unique and that there is exactly one
/// key property.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecordModel {
    properties: Vec<PropertyDefinition>,

    /// Logical name -> position in `properties`
    #[serde(skip)]
    by_logical_name: HashMap<String, usize>,
}

impl RecordModel {
    /// Start a fluent model definition
    pub fn builder() -> RecordModelBuilder {
        RecordModelBuilder::new()
    }

    pub(crate) fn from_validated(properties: Vec<PropertyDefinition>) -> Self {
        let by_logical_name = properties
            .iter()
            .enumerate()
            .map(|(position, property)| (property.logical_name.clone(), position))
            .collect();
        Self {
            properties,
            by_logical_name,
        }
    }

    /// Resolve a logical property name, failing when the model has no such
    /// property.
    pub fn resolve(&self, logical_name: &str) -> Result<&PropertyDefinition, FilterError> {
        self.get(logical_name)
            .ok_or_else(|| FilterError::PropertyNotFound {
                property_name: logical_name.to_string(),
            })
    }

    /// Look up a property by logical name
    pub fn get(&self, logical_name: &str) -> Option<&PropertyDefinition> {
        self.by_logical_name
            .get(logical_name)
            .map(|&position| &self.properties[position])
    }

    /// Properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.properties.iter()
    }

    pub fn key_property(&self) -> Option<&PropertyDefinition> {
        self.properties
            .iter()
            .find(|property| property.role == PropertyRole::Key)
    }

    pub fn data_properties(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.properties_with_role(PropertyRole::Data)
    }

    pub fn vector_properties(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.properties_with_role(PropertyRole::Vector)
    }

    fn properties_with_role(&self, role: PropertyRole) -> impl Iterator<Item = &PropertyDefinition> {
        self.properties
            .iter()
            .filter(move |property| property.role == role)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
