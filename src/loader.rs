use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{kind_of, Error, FieldsResult};

/// Load the json document at `path` and return the working value. When the
/// document is an array only its first element is kept.
pub fn load<P: AsRef<Path>>(path: P) -> FieldsResult<Value> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading document");

    let file = File::open(path).map_err(|e| Error::from(e).with_path(&path.display().to_string()))?;

    // the file is dropped on return, parse errors included
    let value =
        from_reader(BufReader::new(file)).map_err(|e| e.with_path(&path.display().to_string()))?;

    info!(path = %path.display(), kind = kind_of(&value), "document loaded");
    Ok(value)
}

/// Parse a json document from a reader and return the working value.
pub fn from_reader<R: Read>(reader: R) -> FieldsResult<Value> {
    let doc: Value = serde_json::from_reader(reader)?;
    first_element(doc)
}

/// Parse a json document from a string and return the working value.
pub fn from_str(s: &str) -> FieldsResult<Value> {
    let doc: Value = serde_json::from_str(s)?;
    first_element(doc)
}

/// Unwrap a top level array to its first element. Anything else is
/// returned unchanged. Only a single level is unwrapped.
pub fn first_element(doc: Value) -> FieldsResult<Value> {
    match doc {
        Value::Array(items) => {
            debug!(len = items.len(), "document is an array, using the first element");
            items.into_iter().next().ok_or(Error::EmptyArray)
        }
        doc => Ok(doc),
    }
}
