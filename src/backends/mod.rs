// Copyright 2025 ProximaDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! Native filter backends
//!
//! Each document store understands a different subset of the generic filter
//! vocabulary. A backend translates what it can and rejects the rest with
//! [`FilterError::UnsupportedClauseKind`].

pub mod mongodb;

use crate::core::FilterError;
use crate::filter::{ClauseKind, NativeFilterDocument, VectorSearchFilter};
use crate::model::RecordModel;

pub use mongodb::{build_filter, MongoFilterTranslator};

/// Translation of generic filters into a backend's native filter document
pub trait FilterTranslator: Send + Sync {
    /// Backend name for identification
    fn backend_name(&self) -> &'static str;

    /// Whether clauses of this kind can be expressed by the backend
    fn supports(&self, kind: ClauseKind) -> bool;

    /// Translate `filter` against `model`.
    ///
    /// Returns `Ok(None)` when there is nothing to filter on (no filter or no
    /// clauses), which callers treat as "match all".
    fn translate(
        &self,
        filter: Option<&VectorSearchFilter>,
        model: &RecordModel,
    ) -> Result<Option<NativeFilterDocument>, FilterError>;
}
