// Copyright 2025 ProximaDB
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.

//! MongoDB filter backend
//!
//! Produces query filters for MongoDB and Azure Cosmos DB for MongoDB (vCore).
//! Only equality clauses are expressible; each becomes
//! `{ "<storage_name>": { "$eq": <value> } }`.

use tracing::{debug, warn};

use super::FilterTranslator;
use crate::core::FilterError;
use crate::filter::{ClauseKind, FilterClause, FilterOperator, NativeFilterDocument, VectorSearchFilter};
use crate::model::RecordModel;

/// Stateless MongoDB filter translator
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoFilterTranslator;

impl MongoFilterTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl FilterTranslator for MongoFilterTranslator {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    fn supports(&self, kind: ClauseKind) -> bool {
        matches!(kind, ClauseKind::Equality)
    }

    fn translate(
        &self,
        filter: Option<&VectorSearchFilter>,
        model: &RecordModel,
    ) -> Result<Option<NativeFilterDocument>, FilterError> {
        build_filter(filter, model)
    }
}

/// Build the MongoDB query filter for a vector search.
///
/// Examples:
/// - no filter, or a filter without clauses: `None`
/// - `EqualTo("Property1", "v")` with `Property1 -> property_1`:
///   `{ "property_1": { "$eq": "v" } }`
///
/// Fails on the first clause that is unsupported, references an unknown
/// property, or targets a storage field already constrained by an earlier
/// clause.
pub fn build_filter(
    filter: Option<&VectorSearchFilter>,
    model: &RecordModel,
) -> Result<Option<NativeFilterDocument>, FilterError> {
    let filter = match filter {
        Some(filter) if !filter.is_empty() => filter,
        _ => return Ok(None),
    };

    let mut document = NativeFilterDocument::with_capacity(filter.len());
    for clause in filter.clauses() {
        if let Err(e) = translate_clause(clause, model, &mut document) {
            warn!("⚠️ Rejected MongoDB filter: {}", e);
            return Err(e);
        }
    }

    debug!("🔍 Built MongoDB filter with {} field(s)", document.len());
    Ok(Some(document))
}

fn translate_clause(
    clause: &FilterClause,
    model: &RecordModel,
    document: &mut NativeFilterDocument,
) -> Result<(), FilterError> {
    match clause {
        FilterClause::Equality { property_name, value } => {
            let property = model.resolve(property_name)?;
            document.insert(property.storage_name.as_str(), FilterOperator::Eq(value.clone()))
        }
        FilterClause::AnyTagEqualTo { .. } => Err(FilterError::UnsupportedClauseKind {
            kind: clause.kind(),
        }),
    }
}
