use serde::Deserialize;
use serde_json::{Map, Value};
use serde_yaml_with_quirks::DeserializingQuirks;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {0}: {1}")]
    Read(String, io::Error),
    #[error("failed to parse {0}: {1}")]
    Yaml(String, serde_yaml_with_quirks::Error),
}
pub type Result<T> = std::result::Result<T, Error>;

/// Read all documents from file, or from stdin if no path is given
pub fn load(path: Option<&Path>) -> Result<Vec<Value>> {
    let (source, contents) = match path {
        Some(path) => {
            let source = path.display().to_string();
            let contents = fs::read_to_string(path).map_err(|e| Error::Read(source.clone(), e))?;
            (source, contents)
        }
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(|e| Error::Read("stdin".to_owned(), e))?;
            ("stdin".to_owned(), contents)
        }
    };
    parse_documents(&source, &contents)
}

/// Parse multi-document yaml, json is accepted too
pub fn parse_documents(source: &str, contents: &str) -> Result<Vec<Value>> {
    let mut out = Vec::new();
    for document in serde_yaml_with_quirks::Deserializer::from_str_with_quirks(
        contents,
        DeserializingQuirks { old_octals: true },
    ) {
        out.push(Value::deserialize(document).map_err(|e| Error::Yaml(source.to_owned(), e))?);
    }
    Ok(out)
}

fn is_list_kind(obj: &Map<String, Value>) -> bool {
    obj.get("kind")
        .and_then(Value::as_str)
        .map(|kind| kind.ends_with("List"))
        .unwrap_or(false)
}

/// Expand `*List` objects into their items, drop empty and non-object documents
pub fn flatten(documents: Vec<Value>) -> Vec<Value> {
    let mut out = Vec::new();
    for document in documents {
        match document {
            Value::Null => log::debug!("skipping empty document"),
            Value::Object(mut obj) => match obj.remove("items") {
                Some(Value::Array(items)) if is_list_kind(&obj) => out.extend(flatten(items)),
                Some(items) => {
                    obj.insert("items".to_owned(), items);
                    out.push(Value::Object(obj));
                }
                None => out.push(Value::Object(obj)),
            },
            other => log::warn!("skipping non-object document: {}", other),
        }
    }
    out
}
