use crate::dataset::matching::Searchable;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// On-disk encoding of a record table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// JSON array of records
    Json,
    /// YAML sequence of records
    Yaml,
}

impl DataFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("yaml") | Some("yml") => Ok(DataFormat::Yaml),
            _ => Err(Error::Dataset(format!(
                "Unsupported dataset format for {}: expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }
}

/// Load a record table from disk.
pub fn load_table<R>(path: impl AsRef<Path>) -> Result<Vec<R>>
where
    R: Searchable + DeserializeOwned,
{
    let path = path.as_ref();
    let format = DataFormat::from_path(path)?;

    debug!("Reading dataset from {:?} ({:?})", path, format);
    let content = std::fs::read_to_string(path)?;

    let rows = parse_table::<R>(&content, format)?;

    if rows.is_empty() {
        warn!("Dataset {:?} contains no records", path);
    }
    info!("Loaded {} records from {:?}", rows.len(), path);

    Ok(rows)
}

/// Parse a record table from a string.
///
/// Every record must be an object containing all of `R::COLUMNS`; values may
/// be null. Unknown columns are ignored.
pub fn parse_table<R>(content: &str, format: DataFormat) -> Result<Vec<R>>
where
    R: Searchable + DeserializeOwned,
{
    let records: Vec<Value> = match format {
        DataFormat::Json => serde_json::from_str(content)?,
        DataFormat::Yaml => serde_yaml::from_str(content)?,
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| decode_record(index, record))
        .collect()
}

fn decode_record<R>(index: usize, record: Value) -> Result<R>
where
    R: Searchable + DeserializeOwned,
{
    let object = record
        .as_object()
        .ok_or_else(|| Error::Dataset(format!("Row {index} is not a record")))?;

    if let Some(column) = R::COLUMNS.iter().find(|c| !object.contains_key(**c)) {
        return Err(Error::Dataset(format!(
            "Row {index} is missing column '{column}'"
        )));
    }

    serde_json::from_value(record).map_err(|e| Error::Dataset(format!("Row {index}: {e}")))
}
