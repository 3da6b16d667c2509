// Copyright 2025 ProximaDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Native MongoDB filter document

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::core::FilterError;

/// Single-field query operator
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOperator {
    /// `{ "$eq": value }`
    Eq(Value),
}

impl FilterOperator {
    /// MongoDB operator keyword
    pub fn operator_name(&self) -> &'static str {
        match self {
            FilterOperator::Eq(_) => "$eq",
        }
    }

    pub fn operand(&self) -> &Value {
        match self {
            FilterOperator::Eq(value) => value,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for FilterOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.operator_name(), self.operand())?;
        map.end()
    }
}

/// Ordered mapping from storage field name to a single operator.
///
/// Fields appear in insertion order and are unique: inserting a field twice is
/// a [`FilterError::ConflictingClause`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeFilterDocument {
    fields: Vec<(String, FilterOperator)>,
    positions: HashMap<String, usize>,
}

impl NativeFilterDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(
        &mut self,
        storage_field: impl Into<String>,
        operator: FilterOperator,
    ) -> Result<(), FilterError> {
        let storage_field = storage_field.into();
        if self.positions.contains_key(&storage_field) {
            return Err(FilterError::ConflictingClause { storage_field });
        }
        self.positions.insert(storage_field.clone(), self.fields.len());
        self.fields.push((storage_field, operator));
        Ok(())
    }

    pub fn contains_field(&self, storage_field: &str) -> bool {
        self.positions.contains_key(storage_field)
    }

    pub fn get(&self, storage_field: &str) -> Option<&FilterOperator> {
        self.positions
            .get(storage_field)
            .map(|&position| &self.fields[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterOperator)> {
        self.fields
            .iter()
            .map(|(field, operator)| (field.as_str(), operator))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON form accepted by the MongoDB driver, e.g.
    /// `{ "property_1": { "$eq": "TestValue1" } }`
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for NativeFilterDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, operator) in &self.fields {
            map.serialize_entry(field, operator)?;
        }
        map.end()
    }
}
