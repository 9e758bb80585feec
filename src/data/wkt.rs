//! Plain-text WKT files served next to each reference page.

use crate::data::record::CrsRecord;
use crate::Result;
use fxhash::FxHashSet;
use std::path::{Path, PathBuf};

/// Record field a flavour takes its text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WktField {
    OgcWkt,
    Wkt2,
}

/// A WKT flavour and the directory its files live in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WktFlavor {
    pub dir: &'static str,
    pub version: &'static str,
    field: WktField,
}

pub const WKT1_GDAL: WktFlavor = WktFlavor {
    dir: "wkt1",
    version: "WKT1_GDAL",
    field: WktField::OgcWkt,
};

pub const WKT2_2019: WktFlavor = WktFlavor {
    dir: "wkt2",
    version: "WKT2_2019",
    field: WktField::Wkt2,
};

/// Every flavour a reference page links to
pub const WKT_FLAVORS: [WktFlavor; 2] = [WKT1_GDAL, WKT2_2019];

impl WktFlavor {
    fn text<'a>(&self, record: &'a CrsRecord) -> Option<&'a str> {
        match self.field {
            WktField::OgcWkt => record.ogcwkt.as_deref(),
            WktField::Wkt2 => record.wkt2.as_deref(),
        }
    }
}

/// Site-relative path of a record's WKT file: `wkt1/EPSG/4326.txt`
pub fn wkt_path(flavor: WktFlavor, record: &CrsRecord) -> String {
    format!("{}/{}/{}.txt", flavor.dir, record.auth_name, record.code)
}

/// File body for a record, falling back to an error note when no WKT is known
pub fn wkt_text(flavor: WktFlavor, record: &CrsRecord) -> String {
    match flavor.text(record).map(str::trim_end) {
        Some(wkt) if !wkt.is_empty() => format!("{}\n", wkt),
        _ => format!(
            "Error: {} cannot be written as {}\n type: {}\n name: {}\n",
            record.identifier(),
            flavor.version,
            record.type_name(),
            record.name
        ),
    }
}

/// Writes one WKT file per distinct record below `dest_dir`
pub fn export_wkt(
    records: &[CrsRecord],
    flavor: WktFlavor,
    dest_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let dest_dir = dest_dir.as_ref();
    let mut seen = FxHashSet::default();
    let mut written = Vec::new();

    for record in records {
        let path = dest_dir.join(wkt_path(flavor, record));
        if !seen.insert(path.clone()) {
            continue;
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, wkt_text(flavor, record))?;
        written.push(path);
    }

    log::info!(
        "wrote {} {} files to {}",
        written.len(),
        flavor.version,
        dest_dir.display()
    );
    Ok(written)
}
