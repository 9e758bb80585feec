use crate::core::{area::AreaOfUse, config::join_home, constants::CODE_SORT_WIDTH};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of `crslist.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrsRecord {
    pub auth_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    pub name: String,
    /// CRS kind as exported by PROJ, e.g. `PROJECTED_CRS`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub crs_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_of_use: Option<AreaOfUse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_method_name: Option<String>,
    /// OGC WKT text scraped for authorities PROJ does not ship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ogcwkt: Option<String>,
    /// WKT2_2019 text, when the export carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkt2: Option<String>,
}

/// Codes are strings in the index but hand-written lists sometimes use numbers
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(u64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    })
}

impl CrsRecord {
    pub fn new(
        auth_name: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            auth_name: auth_name.into(),
            code: code.into(),
            name: name.into(),
            crs_type: None,
            deprecated: None,
            area_of_use: None,
            projection_method_name: None,
            ogcwkt: None,
            wkt2: None,
        }
    }

    pub fn with_area_of_use(mut self, area: AreaOfUse) -> Self {
        self.area_of_use = Some(area);
        self
    }

    /// `AUTH:code`, the record's identity
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.auth_name, self.code)
    }

    /// Reference page of this CRS: `<home_dir>/ref/<auth lowercase>/<code>/`
    pub fn href(&self, home_dir: &str) -> String {
        join_home(
            home_dir,
            &format!("ref/{}/{}/", self.auth_name.to_lowercase(), self.code),
        )
    }

    /// Text shown in the reference list
    pub fn label(&self) -> String {
        format!("{} {}", self.identifier(), self.name)
    }

    /// Index order: authority, then the code left-padded with zeros to 7 places
    pub fn sort_key(&self) -> String {
        format!(
            "{}{:0>width$}",
            self.auth_name,
            self.code,
            width = CODE_SORT_WIDTH
        )
    }

    /// Type without the `PJType.` prefix Python enums leak into the export
    pub fn type_name(&self) -> &str {
        self.crs_type
            .as_deref()
            .map(|t| t.trim_start_matches("PJType."))
            .unwrap_or("UNKNOWN")
    }
}
