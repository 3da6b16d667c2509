/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! # Vector Store Filter Translation
//!
//! Converts store-agnostic vector search filters into native MongoDB /
//! Azure Cosmos DB for MongoDB query filters.
//!
//! ## Building blocks
//!
//! - **Record model**: maps logical property names to storage field names
//! - **Filter vocabulary**: ordered clauses against logical names
//! - **Backends**: per-store translators producing native filter documents
//!
//! ```
//! use vectorstore_filter::{build_filter, RecordModel, VectorSearchFilter};
//!
//! let model = RecordModel::builder()
//!     .key_with_storage("Property1", "property_1")
//!     .data_with_storage("Property2", "property_2")
//!     .build()
//!     .unwrap();
//!
//! let filter = VectorSearchFilter::new().equal_to("Property1", "TestValue1");
//! let document = build_filter(Some(&filter), &model).unwrap().unwrap();
//!
//! assert_eq!(
//!     document.to_json().unwrap().to_string(),
//!     r#"{"property_1":{"$eq":"TestValue1"}}"#
//! );
//! ```

pub mod backends;
pub mod core;
pub mod filter;
pub mod model;

pub use backends::{build_filter, FilterTranslator, MongoFilterTranslator};
pub use crate::core::{Config, ConfigError, FilterError, ModelError, VectorStoreError};
pub use filter::{ClauseKind, FilterClause, FilterOperator, NativeFilterDocument, VectorSearchFilter};
pub use model::{PropertyDefinition, PropertyRole, RecordDefinition, RecordModel, RecordModelBuilder};

pub type Result<T> = std::result::Result<T, VectorStoreError>;
