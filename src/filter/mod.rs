// Copyright 2025 ProximaDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Generic vector search filter vocabulary
//!
//! Filters are written against logical property names and know nothing about
//! any particular database. Backends translate them into their native form
//! (see [`crate::backends`]).

pub mod document;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use document::{FilterOperator, NativeFilterDocument};

/// Discriminant of a [`FilterClause`], used in error reporting and in
/// backend capability checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    Equality,
    AnyTagEqualTo,
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseKind::Equality => write!(f, "Equality"),
            ClauseKind::AnyTagEqualTo => write!(f, "AnyTagEqualTo"),
        }
    }
}

/// One atomic constraint of a search filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum FilterClause {
    /// Property equals the given value
    #[serde(rename = "equal_to")]
    Equality {
        #[serde(rename = "property")]
        property_name: String,
        value: Value,
    },

    /// A tag-list property contains the given value
    #[serde(rename = "any_tag_equal_to")]
    AnyTagEqualTo {
        #[serde(rename = "property")]
        property_name: String,
        value: Value,
    },
}

impl FilterClause {
    pub fn kind(&self) -> ClauseKind {
        match self {
            FilterClause::Equality { .. } => ClauseKind::Equality,
            FilterClause::AnyTagEqualTo { .. } => ClauseKind::AnyTagEqualTo,
        }
    }

    pub fn property_name(&self) -> &str {
        match self {
            FilterClause::Equality { property_name, .. }
            | FilterClause::AnyTagEqualTo { property_name, .. } => property_name,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            FilterClause::Equality { value, .. } | FilterClause::AnyTagEqualTo { value, .. } => value,
        }
    }
}

/// Ordered list of clauses combined with AND semantics.
///
/// Construction never fails: conflicting or unsupported clauses are detected
/// when a backend translates the filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VectorSearchFilter {
    #[serde(default)]
    clauses: Vec<FilterClause>,
}

impl VectorSearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality clause
    pub fn equal_to(mut self, property_name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push(FilterClause::Equality {
            property_name: property_name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a tag-membership clause
    pub fn any_tag_equal_to(
        mut self,
        property_name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.clauses.push(FilterClause::AnyTagEqualTo {
            property_name: property_name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_clause(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

impl FromIterator<FilterClause> for VectorSearchFilter {
    fn from_iter<I: IntoIterator<Item = FilterClause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}
