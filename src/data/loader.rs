use crate::core::config::SiteConfig;
use crate::data::catalog::CrsCatalog;
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use std::path::PathBuf;

/// Shared HTTP client; building it once keeps the connection pool around
/// for repeated loads.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Where the record index comes from. A page load fetches it exactly once.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait CatalogSource {
    async fn fetch(&self) -> Result<CrsCatalog>;

    /// Human readable location, for logs
    fn location(&self) -> String;
}

/// `crslist.json` served next to the site
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<CrsCatalog> {
        log::debug!("fetching CRS list from {}", self.url);
        let response = HTTP_CLIENT.get(&self.url).send().await?.error_for_status()?;
        let records = response.json().await?;
        Ok(CrsCatalog::new(records))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// `crslist.json` on the local disk, e.g. in a freshly generated site
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<CrsCatalog> {
        log::debug!("reading CRS list from {}", self.path.display());
        #[cfg(feature = "tokio-runtime")]
        let text = tokio::fs::read_to_string(&self.path).await?;
        #[cfg(not(feature = "tokio-runtime"))]
        let text = std::fs::read_to_string(&self.path)?;
        CrsCatalog::from_json_str(&text)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the source for `<home_dir>/crslist.json`: HTTP for web URLs,
/// the filesystem otherwise.
pub fn source_for(config: &SiteConfig) -> Box<dyn CatalogSource + Send + Sync> {
    let location = config.list_location();
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpCatalogSource::new(location))
    } else {
        Box::new(FileCatalogSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        let mut config = SiteConfig::default();
        assert_eq!(source_for(&config).location(), "./crslist.json");

        config.home_dir = "https://crs.example/docs".to_string();
        assert_eq!(
            source_for(&config).location(),
            "https://crs.example/docs/crslist.json"
        );
    }

    #[tokio::test]
    async fn test_file_source_reads_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crslist.json");
        std::fs::write(
            &path,
            r#"[{"auth_name": "EPSG", "code": "4326", "name": "WGS 84"}]"#,
        )
        .unwrap();

        let catalog = FileCatalogSource::new(&path).fetch().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "WGS 84");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let result = FileCatalogSource::new("/nonexistent/crslist.json").fetch().await;
        assert!(matches!(result, Err(crate::CrsMapError::Io(_))));
    }
}
