//! Color catalog: wire types and the one-shot loaders that populate them.
//!
//! The remote endpoint serves `{ "colors": [ { name, hex_code, color_code },
//! ... ] }`; an older variant serves the bare array without the wrapper. Both
//! decode to the same [`Catalog`]. Records whose `hex_code` is not exactly
//! six hex digits are dropped at the parse boundary, so everything held in a
//! catalog renders without a fallible path downstream.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::contrast;

/// Default catalog endpoint.
pub const DEFAULT_URL: &str = "https://api.prolook.com/api/colors/prolook";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("catalog payload did not decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// One named color as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorRecord {
    pub name: String,
    pub hex_code: String,
    pub color_code: String,
}

/// Ordered list of color records, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub records: Vec<ColorRecord>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorRecord> {
        self.records.get(index)
    }
}

/// The two payload shapes the endpoint has served over time. The wrapped
/// form is canonical; the bare array is a compatibility shim.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Wrapped { colors: Vec<ColorRecord> },
    Bare(Vec<ColorRecord>),
}

impl CatalogPayload {
    fn into_records(self) -> Vec<ColorRecord> {
        match self {
            CatalogPayload::Wrapped { colors } => colors,
            CatalogPayload::Bare(records) => records,
        }
    }
}

/// Decode a payload body into a catalog, dropping records whose hex code
/// fails validation.
pub fn parse_catalog(body: &str) -> Result<Catalog, CatalogError> {
    let payload: CatalogPayload = serde_json::from_str(body)?;
    let records = payload
        .into_records()
        .into_iter()
        .filter(|record| match contrast::parse_hex(&record.hex_code) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(name = %record.name, hex = %record.hex_code, %err, "dropping record with invalid hex code");
                false
            }
        })
        .collect();
    Ok(Catalog { records })
}

/// GET the catalog endpoint and decode the response body.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Catalog, CatalogError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| CatalogError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| CatalogError::Transport {
            url: url.to_string(),
            source,
        })?;
    parse_catalog(&body)
}

/// Load a catalog from a local JSON file (same payload shapes as the API).
pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogError> {
    let body = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&body)
}

/// Where the catalog comes from: the HTTP endpoint, or a local fixture file.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// Load the catalog, blocking the calling thread. The URL case spins up
    /// a single-use current-thread runtime for the one request.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogSource::File(path) => load_from_file(path),
            CatalogSource::Url(url) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(CatalogError::Runtime)?;
                runtime.block_on(async {
                    let client = reqwest::Client::new();
                    fetch_catalog(&client, url).await
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = r#"{"colors":[
        {"name":"White","hex_code":"FFFFFF","color_code":"WH"},
        {"name":"Black","hex_code":"000000","color_code":"BK"},
        {"name":"Red","hex_code":"FF0000","color_code":"RD"}
    ]}"#;

    const BARE: &str = r#"[
        {"name":"White","hex_code":"FFFFFF","color_code":"WH"},
        {"name":"Black","hex_code":"000000","color_code":"BK"},
        {"name":"Red","hex_code":"FF0000","color_code":"RD"}
    ]"#;

    #[test]
    fn wrapped_payload_parses_in_order() {
        let catalog = parse_catalog(WRAPPED).unwrap();
        let names: Vec<&str> = catalog.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["White", "Black", "Red"]);
    }

    #[test]
    fn bare_payload_parses_identically() {
        assert_eq!(parse_catalog(WRAPPED).unwrap(), parse_catalog(BARE).unwrap());
    }

    #[test]
    fn record_fields_come_through_verbatim() {
        let catalog = parse_catalog(WRAPPED).unwrap();
        let red = catalog.get(2).unwrap();
        assert_eq!(red.name, "Red");
        assert_eq!(red.hex_code, "FF0000");
        assert_eq!(red.color_code, "RD");
    }

    #[test]
    fn invalid_hex_records_are_dropped() {
        let body = r#"{"colors":[
            {"name":"Good","hex_code":"ABCDEF","color_code":"G"},
            {"name":"Short","hex_code":"FFF","color_code":"S"},
            {"name":"Junk","hex_code":"GGGGGG","color_code":"J"}
        ]}"#;
        let catalog = parse_catalog(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name, "Good");
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            parse_catalog("{not json"),
            Err(CatalogError::Decode(_))
        ));
        // Valid JSON in neither shape is also a decode fault.
        assert!(matches!(
            parse_catalog(r#"{"palette":[]}"#),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = parse_catalog(r#"{"colors":[]}"#).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file(Path::new("/nonexistent/colors.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
