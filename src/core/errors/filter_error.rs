//! Filter translation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::ClauseKind;

/// Errors raised while translating a vector search filter into a native
/// filter document. The first violation aborts the translation; no partial
/// document is ever returned.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FilterError {
    /// A clause references a property that is not part of the record model.
    #[error("Property '{property_name}' is not defined on the record model")]
    PropertyNotFound { property_name: String },

    /// The clause kind exists in the generic vocabulary but the backend
    /// cannot express it.
    #[error("Filter clause of kind '{kind}' is not supported by this backend")]
    UnsupportedClauseKind { kind: ClauseKind },

    /// Two clauses resolve to the same storage field.
    #[error("Multiple filter clauses target storage field '{storage_field}'")]
    ConflictingClause { storage_field: String },
}

impl FilterError {
    /// All translation failures are caused by the caller's filter, never by
    /// transient conditions.
    pub fn is_request_error(&self) -> bool {
        match self {
            Self::PropertyNotFound { .. }
            | Self::UnsupportedClauseKind { .. }
            | Self::ConflictingClause { .. } => true,
        }
    }
}
