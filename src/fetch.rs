//! Loading the schema document, either over HTTP or from a local file.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{GenError, Result};
use crate::swagger::SchemaDocument;

pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<SchemaDocument> {
    info!(%url, "Fetching schema document.");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| GenError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    debug!(%status, "Received schema document response.");
    if !status.is_success() {
        return Err(GenError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| GenError::Fetch {
        url: url.to_string(),
        source,
    })?;
    SchemaDocument::from_json(&body)
}

pub fn read_document(path: &Path) -> Result<SchemaDocument> {
    info!(path = %path.display(), "Reading schema document.");
    let contents = std::fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SchemaDocument::from_json(&contents)
}
