use crate::data::record::CrsRecord;

/// Free-text search over the reference list.
///
/// Every space separated token must occur in the record name, ignoring case.
/// A numeric first token also matches a record whose code is exactly that
/// number, whatever the name says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    tokens: Vec<String>,
    code: Option<String>,
}

impl SearchFilter {
    pub fn new(search: &str) -> Self {
        let tokens: Vec<String> = search.split_whitespace().map(str::to_lowercase).collect();
        let code = tokens
            .first()
            .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
            .cloned();
        Self { tokens, code }
    }

    /// Empty or whitespace-only searches let everything through
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn matches(&self, record: &CrsRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.code.as_deref() == Some(record.code.as_str()) {
            return true;
        }
        let name = record.name.to_lowercase();
        self.tokens.iter().all(|token| name.contains(token.as_str()))
    }

    pub fn apply<'a>(&self, records: &'a [CrsRecord]) -> Vec<&'a CrsRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CrsRecord> {
        vec![
            CrsRecord::new("EPSG", "4326", "WGS_84"),
            CrsRecord::new("EPSG", "3857", "Pseudo_Mercator"),
        ]
    }

    #[test]
    fn test_numeric_search_matches_code() {
        let records = sample();
        let hits = SearchFilter::new("4326").apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "4326");
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let records = sample();
        let hits = SearchFilter::new("merc").apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "3857");

        assert_eq!(SearchFilter::new("MERC").apply(&records).len(), 1);
    }

    #[test]
    fn test_blank_search_passes_everything() {
        let records = sample();
        assert_eq!(SearchFilter::new("").apply(&records).len(), 2);
        assert_eq!(SearchFilter::new("   ").apply(&records).len(), 2);
        assert!(SearchFilter::new(" \t ").is_empty());
    }

    #[test]
    fn test_all_tokens_must_match() {
        let records = vec![
            CrsRecord::new("EPSG", "32633", "WGS 84 / UTM zone 33N"),
            CrsRecord::new("EPSG", "25833", "ETRS89 / UTM zone 33N"),
        ];
        let hits = SearchFilter::new("utm wgs").apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "32633");
    }

    #[test]
    fn test_code_match_overrides_name_tokens() {
        let records = sample();
        // "zzz" matches no name, but the code hit wins
        let hits = SearchFilter::new("4326 zzz").apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "4326");
    }

    #[test]
    fn test_numeric_token_also_searches_names() {
        let records = vec![CrsRecord::new("EPSG", "2056", "CH1903+ / LV95 2056")];
        assert!(SearchFilter::new("95").matches(&records[0]));
        assert!(!SearchFilter::new("4326").matches(&records[0]));
    }
}
