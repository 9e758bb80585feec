//! The record index behind the reference list.
//!
//! The site ships one `crslist.json`, a flat JSON array of [`CrsRecord`]s.
//! [`CrsCatalog::build_index`] produces it from an exported record list the
//! same way the site generator always has: records without an area of use are
//! dropped, the rest sorted by authority and zero-padded code, and duplicated
//! identities reported.

use crate::data::record::CrsRecord;
use crate::{CrsMapError, Result};
use fxhash::FxHashSet;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrsCatalog {
    records: Vec<CrsRecord>,
}

/// Outcome of [`CrsCatalog::build_index`]
#[derive(Debug, Clone, PartialEq)]
pub struct IndexReport {
    pub catalog: CrsCatalog,
    /// Records dropped for lacking an area of use
    pub skipped: usize,
    /// `AUTH:code` identities seen more than once, in index order
    pub duplicates: Vec<String>,
}

impl CrsCatalog {
    pub fn new(records: Vec<CrsRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CrsRecord> = serde_json::from_str(json)?;
        log::debug!("parsed {} CRS records", records.len());
        Ok(Self::new(records))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<CrsRecord> = serde_json::from_reader(reader)?;
        Ok(Self::new(records))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.records.serialize(&mut serializer)?;
        String::from_utf8(out).map_err(|e| {
            CrsMapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    pub fn records(&self) -> &[CrsRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CrsRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by identity; authority names compare case-insensitively
    pub fn find(&self, auth_name: &str, code: &str) -> Option<&CrsRecord> {
        self.records
            .iter()
            .find(|r| r.code == code && r.auth_name.eq_ignore_ascii_case(auth_name))
    }

    /// Filters, sorts and checks an exported record list
    pub fn build_index(records: Vec<CrsRecord>) -> IndexReport {
        let total = records.len();
        let mut kept: Vec<CrsRecord> = records
            .into_iter()
            .filter(|r| r.area_of_use.is_some())
            .collect();
        let skipped = total - kept.len();
        kept.sort_by_cached_key(|r| r.sort_key());

        let mut seen = FxHashSet::default();
        let mut duplicates = Vec::new();
        for record in &kept {
            let id = record.identifier();
            if !seen.insert(id.clone()) {
                log::warn!("{} is duplicated", id);
                duplicates.push(id);
            }
        }

        log::debug!(
            "index built: {} records kept, {} without area of use, {} duplicates",
            kept.len(),
            skipped,
            duplicates.len()
        );

        IndexReport {
            catalog: Self::new(kept),
            skipped,
            duplicates,
        }
    }

    /// Writes the catalog as `<dest_dir>/<file_name>` and returns the path
    pub fn write_index(&self, dest_dir: impl AsRef<Path>, file_name: &str) -> Result<PathBuf> {
        let dest_dir = dest_dir.as_ref();
        std::fs::create_dir_all(dest_dir)?;
        let path = dest_dir.join(file_name);
        std::fs::write(&path, self.to_json_pretty()?)?;
        log::info!("wrote {} records to {}", self.len(), path.display());
        Ok(path)
    }
}
