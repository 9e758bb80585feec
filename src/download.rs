//! Saving a file offered for download, e.g. a WKT definition.
//!
//! The page hands over a file name plus either a `data:` URI or a reference
//! to the content. Outside the browser the content is written to a directory.

use crate::data::loader::HTTP_CLIENT;
use crate::{CrsMapError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::path::{Path, PathBuf};

/// Where the bytes of a download come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadSource {
    /// `data:[<mediatype>][;base64],<payload>`
    DataUri(String),
    /// An `http(s)` URL
    Remote(String),
    /// A local file standing in for a blob
    File(PathBuf),
}

impl DownloadSource {
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("data:") {
            Self::DataUri(reference.to_string())
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            Self::Remote(reference.to_string())
        } else {
            Self::File(PathBuf::from(reference))
        }
    }

    pub async fn bytes(&self) -> Result<Vec<u8>> {
        match self {
            Self::DataUri(uri) => decode_data_uri(uri),
            Self::Remote(url) => {
                let response = HTTP_CLIENT.get(url).send().await?.error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
            #[cfg(feature = "tokio-runtime")]
            Self::File(path) => Ok(tokio::fs::read(path).await?),
            #[cfg(not(feature = "tokio-runtime"))]
            Self::File(path) => Ok(std::fs::read(path)?),
        }
    }
}

/// Decodes the payload of a `data:` URI, base64 or percent-encoded
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CrsMapError::InvalidDataUri("missing data: scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CrsMapError::InvalidDataUri("missing ',' before payload".to_string()))?;

    if header.split(';').any(|part| part.eq_ignore_ascii_case("base64")) {
        BASE64
            .decode(payload.trim())
            .map_err(|e| CrsMapError::InvalidDataUri(e.to_string()))
    } else {
        Ok(percent_decode(payload))
    }
}

fn percent_decode(payload: &str) -> Vec<u8> {
    percent_encoding::percent_decode_str(payload).collect()
}

/// Writes the download into `dest_dir`. Only the file name part of
/// `filename` is used so a page cannot write outside the directory.
pub async fn save_download(
    filename: &str,
    source: &DownloadSource,
    dest_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let name = Path::new(filename).file_name().ok_or_else(|| {
        let message = format!("not a file name: {:?}", filename);
        CrsMapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, message))
    })?;

    let bytes = source.bytes().await?;
    let dest_dir = dest_dir.as_ref();
    let path = dest_dir.join(name);

    #[cfg(feature = "tokio-runtime")]
    {
        tokio::fs::create_dir_all(dest_dir).await?;
        tokio::fs::write(&path, &bytes).await?;
    }
    #[cfg(not(feature = "tokio-runtime"))]
    {
        std::fs::create_dir_all(dest_dir)?;
        std::fs::write(&path, &bytes)?;
    }

    log::info!("saved {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
