//! Record model construction errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`RecordModel`](crate::model::RecordModel)
/// from a record definition.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModelError {
    #[error("Property names must not be empty")]
    EmptyPropertyName,

    #[error("Property '{name}' is defined more than once")]
    DuplicateProperty { name: String },

    #[error("Storage name '{storage_name}' is used by both '{first}' and '{second}'")]
    DuplicateStorageName {
        storage_name: String,
        first: String,
        second: String,
    },

    #[error("Record definition has no key property")]
    MissingKeyProperty,

    #[error("Record definition has multiple key properties: '{first}' and '{second}'")]
    MultipleKeyProperties { first: String, second: String },

    #[error("Storage name '{storage_name}' is reserved and cannot be used by '{property}'")]
    ReservedStorageName {
        storage_name: String,
        property: String,
    },
}
