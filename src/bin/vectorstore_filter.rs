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

//! vectorstore-filter - translate a vector search filter into a MongoDB query filter

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use vectorstore_filter::{Config, FilterTranslator, MongoFilterTranslator, VectorSearchFilter};

#[derive(Parser)]
#[command(name = "vectorstore-filter")]
#[command(about = "Translate vector search filters into MongoDB query filters")]
struct Args {
    /// Collection configuration (TOML)
    #[arg(short, long, default_value = "collection.toml")]
    config: PathBuf,

    /// Filter JSON file, or `-` for stdin
    #[arg(short, long)]
    filter: PathBuf,

    /// Pretty-print the resulting filter
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args.config)?;

    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    if !args.config.exists() {
        info!("Configuration file {:?} not found, using defaults", args.config);
    }

    let output = run(&args, &config, std::io::stdin())?;
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Configuration from `path`, or the defaults when the file does not exist
fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load(path)
    } else {
        Ok(Config::default())
    }
}

/// Translate the filter named by `args`; `Value::Null` means no filter.
/// `stdin` is read when the filter path is `-`.
fn run(args: &Args, config: &Config, stdin: impl Read) -> Result<Value> {
    let model = config
        .record_model()
        .with_context(|| format!("Invalid record definition for collection '{}'", config.collection.name))?;
    debug!("Loaded record model for '{}' with {} properties", config.collection.name, model.len());

    let filter_json = read_filter_source(&args.filter, stdin)?;
    let filter: VectorSearchFilter =
        serde_json::from_str(&filter_json).context("Failed to parse filter JSON")?;

    let translator = MongoFilterTranslator::new();
    let document = translator
        .translate(Some(&filter), &model)
        .with_context(|| format!("Filter cannot be expressed for {}", translator.backend_name()))?;

    match document {
        Some(document) => Ok(document.to_json()?),
        None => Ok(Value::Null),
    }
}

fn read_filter_source(path: &Path, mut stdin: impl Read) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .context("Failed to read filter from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read filter file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use vectorstore_filter::FilterError;

    const COLLECTION: &str = r#"
[collection]
name = "hotels"

[[collection.record.properties]]
name = "Property1"
storage_name = "property_1"
role = "key"

[[collection.record.properties]]
name = "Property2"
storage_name = "property_2"
role = "data"
"#;

    fn args(config: PathBuf, filter: PathBuf) -> Args {
        Args {
            config,
            filter,
            pretty: false,
        }
    }

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_run_translates_filter_file() {
        let dir = TempDir::new().unwrap();
        let config_path = write_file(&dir, "collection.toml", COLLECTION);
        let filter_path = write_file(
            &dir,
            "filter.json",
            r#"{"clauses":[{"kind":"equal_to","property":"Property1","value":"TestValue1"}]}"#,
        );

        let config = load_config(&config_path).unwrap();
        let output = run(&args(config_path, filter_path), &config, std::io::empty()).unwrap();

        assert_eq!(output, json!({ "property_1": { "$eq": "TestValue1" } }));
    }

    #[test]
    fn test_run_reads_filter_from_stdin() {
        let dir = TempDir::new().unwrap();
        let config_path = write_file(&dir, "collection.toml", COLLECTION);
        let stdin = r#"{"clauses":[{"kind":"equal_to","property":"Property2","value":7}]}"#;

        let config = load_config(&config_path).unwrap();
        let output = run(&args(config_path, PathBuf::from("-")), &config, stdin.as_bytes()).unwrap();

        assert_eq!(output, json!({ "property_2": { "$eq": 7 } }));
    }

    #[test]
    fn test_run_empty_filter_is_null() {
        let config = Config::default();
        let output = run(
            &args(PathBuf::from("unused.toml"), PathBuf::from("-")),
            &config,
            r#"{"clauses":[]}"#.as_bytes(),
        )
        .unwrap();

        assert_eq!(output, Value::Null);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());

        // The default record only knows its key property
        let output = run(
            &args(dir.path().join("absent.toml"), PathBuf::from("-")),
            &config,
            r#"{"clauses":[{"kind":"equal_to","property":"Key","value":"k1"}]}"#.as_bytes(),
        )
        .unwrap();
        assert_eq!(output, json!({ "_id": { "$eq": "k1" } }));
    }

    #[test]
    fn test_run_translation_failure_is_error() {
        let config = Config::default();
        let err = run(
            &args(PathBuf::from("unused.toml"), PathBuf::from("-")),
            &config,
            r#"{"clauses":[{"kind":"any_tag_equal_to","property":"Key","value":"a"}]}"#.as_bytes(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<FilterError>(),
            Some(FilterError::UnsupportedClauseKind { .. })
        ));
    }

    #[test]
    fn test_run_malformed_filter_json() {
        let config = Config::default();
        let err = run(
            &args(PathBuf::from("unused.toml"), PathBuf::from("-")),
            &config,
            "{ not json".as_bytes(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Failed to parse filter JSON"));
    }

    #[test]
    fn test_run_missing_filter_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        let result = run(
            &args(dir.path().join("c.toml"), dir.path().join("missing.json")),
            &config,
            std::io::empty(),
        );
        assert!(result.is_err());
    }
}
