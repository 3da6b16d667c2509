// Copyright 2025 ProximaDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Declarative record model construction
//!
//! Turns a plain property list (from code or from a TOML/JSON collection
//! definition) into a validated [`RecordModel`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::core::ModelError;
use super::{PropertyDefinition, PropertyRole, RecordModel, MONGO_KEY_FIELD};

/// One property as written in a record definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyDefinitionSpec {
    /// Logical property name
    pub name: String,

    /// Storage field name; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_name: Option<String>,

    pub role: PropertyRole,
}

impl PropertyDefinitionSpec {
    pub fn new(name: impl Into<String>, role: PropertyRole) -> Self {
        Self {
            name: name.into(),
            storage_name: None,
            role,
        }
    }

    pub fn with_storage_name(mut self, storage_name: impl Into<String>) -> Self {
        self.storage_name = Some(storage_name.into());
        self
    }

    fn effective_storage_name(&self) -> &str {
        self.storage_name.as_deref().unwrap_or(&self.name)
    }
}

/// Property list describing a record type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDefinition {
    #[serde(default)]
    pub properties: Vec<PropertyDefinitionSpec>,
}

impl RecordDefinition {
    pub fn build_model(&self) -> Result<RecordModel, ModelError> {
        RecordModelBuilder::from_definition(self).build()
    }
}

/// Fluent builder for [`RecordModel`]
#[derive(Debug, Clone, Default)]
pub struct RecordModelBuilder {
    properties: Vec<PropertyDefinitionSpec>,
}

impl RecordModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definition(definition: &RecordDefinition) -> Self {
        Self {
            properties: definition.properties.clone(),
        }
    }

    pub fn property(mut self, spec: PropertyDefinitionSpec) -> Self {
        self.properties.push(spec);
        self
    }

    pub fn key(self, name: impl Into<String>) -> Self {
        self.property(PropertyDefinitionSpec::new(name, PropertyRole::Key))
    }

    pub fn key_with_storage(self, name: impl Into<String>, storage_name: impl Into<String>) -> Self {
        self.property(PropertyDefinitionSpec::new(name, PropertyRole::Key).with_storage_name(storage_name))
    }

    pub fn data(self, name: impl Into<String>) -> Self {
        self.property(PropertyDefinitionSpec::new(name, PropertyRole::Data))
    }

    pub fn data_with_storage(self, name: impl Into<String>, storage_name: impl Into<String>) -> Self {
        self.property(PropertyDefinitionSpec::new(name, PropertyRole::Data).with_storage_name(storage_name))
    }

    pub fn vector(self, name: impl Into<String>) -> Self {
        self.property(PropertyDefinitionSpec::new(name, PropertyRole::Vector))
    }

    pub fn vector_with_storage(self, name: impl Into<String>, storage_name: impl Into<String>) -> Self {
        self.property(PropertyDefinitionSpec::new(name, PropertyRole::Vector).with_storage_name(storage_name))
    }

    /// Validate the property list and produce the model.
    ///
    /// Rules, checked per property in declaration order:
    /// - names (logical and storage) must not be empty
    /// - logical names and storage names are unique
    /// - only the key property may be stored as `_id`
    /// - exactly one key property
    pub fn build(self) -> Result<RecordModel, ModelError> {
        let mut logical_names: HashSet<&str> = HashSet::new();
        let mut by_storage: HashMap<&str, &str> = HashMap::new();
        let mut key_name: Option<&str> = None;

        for spec in &self.properties {
            let storage_name = spec.effective_storage_name();
            if spec.name.is_empty() || storage_name.is_empty() {
                return Err(ModelError::EmptyPropertyName);
            }

            if !logical_names.insert(spec.name.as_str()) {
                return Err(ModelError::DuplicateProperty {
                    name: spec.name.clone(),
                });
            }

            if storage_name == MONGO_KEY_FIELD && spec.role != PropertyRole::Key {
                return Err(ModelError::ReservedStorageName {
                    storage_name: storage_name.to_string(),
                    property: spec.name.clone(),
                });
            }

            if let Some(first) = by_storage.insert(storage_name, spec.name.as_str()) {
                return Err(ModelError::DuplicateStorageName {
                    storage_name: storage_name.to_string(),
                    first: first.to_string(),
                    second: spec.name.clone(),
                });
            }

            if spec.role == PropertyRole::Key {
                if let Some(first) = key_name {
                    return Err(ModelError::MultipleKeyProperties {
                        first: first.to_string(),
                        second: spec.name.clone(),
                    });
                }
                key_name = Some(spec.name.as_str());
            }
        }

        if key_name.is_none() {
            return Err(ModelError::MissingKeyProperty);
        }

        let properties: Vec<PropertyDefinition> = self
            .properties
            .iter()
            .map(|spec| {
                PropertyDefinition::new(spec.name.clone(), spec.effective_storage_name(), spec.role)
            })
            .collect();

        debug!("📋 Built record model with {} properties", properties.len());
        Ok(RecordModel::from_validated(properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_definition() {
        let definition = RecordDefinition {
            properties: vec![
                PropertyDefinitionSpec::new("Property1", PropertyRole::Key).with_storage_name("property_1"),
                PropertyDefinitionSpec::new("Property2", PropertyRole::Data).with_storage_name("property_2"),
            ],
        };

        let model = definition.build_model().unwrap();
        assert_eq!(model.resolve("Property1").unwrap().storage_name, "property_1");
        assert_eq!(model.resolve("Property2").unwrap().storage_name, "property_2");
    }

    #[test]
    fn test_duplicate_logical_name_rejected() {
        let err = RecordModel::builder()
            .key("Id")
            .data("Name")
            .data_with_storage("Name", "other")
            .build()
            .unwrap_err();

        assert_eq!(err, ModelError::DuplicateProperty { name: "Name".to_string() });
    }

    #[test]
    fn test_duplicate_storage_name_rejected() {
        let err = RecordModel::builder()
            .key("Id")
            .data_with_storage("First", "shared")
            .data_with_storage("Second", "shared")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::DuplicateStorageName {
                storage_name: "shared".to_string(),
                first: "First".to_string(),
                second: "Second".to_string(),
            }
        );
    }

    #[test]
    fn test_default_storage_name_collides_with_explicit_one() {
        let err = RecordModel::builder()
            .key("Id")
            .data("title")
            .data_with_storage("Title", "title")
            .build()
            .unwrap_err();

        assert!(matches!(err, ModelError::DuplicateStorageName { .. }));
    }

    #[test]
    fn test_key_property_required() {
        let err = RecordModel::builder().data("Name").build().unwrap_err();
        assert_eq!(err, ModelError::MissingKeyProperty);

        let err = RecordModelBuilder::new().build().unwrap_err();
        assert_eq!(err, ModelError::MissingKeyProperty);
    }

    #[test]
    fn test_multiple_keys_rejected() {
        let err = RecordModel::builder().key("A").key("B").build().unwrap_err();
        assert_eq!(
            err,
            ModelError::MultipleKeyProperties {
                first: "A".to_string(),
                second: "B".to_string(),
            }
        );
    }

    #[test]
    fn test_reserved_id_only_for_key() {
        let model = RecordModel::builder().key_with_storage("Id", "_id").build().unwrap();
        assert_eq!(model.key_property().unwrap().storage_name, MONGO_KEY_FIELD);

        let err = RecordModel::builder()
            .key("Id")
            .vector_with_storage("Embedding", "_id")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::ReservedStorageName {
                storage_name: "_id".to_string(),
                property: "Embedding".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_names_rejected() {
        let err = RecordModel::builder().key("").build().unwrap_err();
        assert_eq!(err, ModelError::EmptyPropertyName);

        let err = RecordModel::builder()
            .key("Id")
            .data_with_storage("Name", "")
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::EmptyPropertyName);
    }

    #[test]
    fn test_definition_from_json() {
        let json = r#"{
            "properties": [
                { "name": "Id", "role": "key" },
                { "name": "Tags", "storage_name": "tags", "role": "data" },
                { "name": "Vector", "role": "vector" }
            ]
        }"#;

        let definition: RecordDefinition = serde_json::from_str(json).unwrap();
        let model = definition.build_model().unwrap();

        assert_eq!(model.len(), 3);
        assert_eq!(model.resolve("Tags").unwrap().storage_name, "tags");
        assert_eq!(model.resolve("Vector").unwrap().role, PropertyRole::Vector);
    }
}
