//! Page state lives in the URL and nowhere else: `?page=<n>&search=<text>`.

use crate::{CrsMapError, Result};
use url::{form_urlencoded, Url};

/// Current page and search text of the reference list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page number
    pub page: usize,
    pub search: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl PageState {
    pub fn new(page: usize, search: impl Into<String>) -> Self {
        Self {
            page,
            search: search.into(),
        }
    }

    /// Parses a query string, with or without the leading `?`.
    /// A missing or unreadable `page` means page 1.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut state = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => match value.trim().parse::<usize>() {
                    Ok(page) => state.page = page,
                    Err(_) => log::warn!("ignoring unreadable page number {:?}", value),
                },
                "search" => state.search = value.into_owned(),
                _ => {}
            }
        }
        state
    }

    /// Parses the query part of a full page URL
    pub fn from_url(url: &str) -> Result<Self> {
        let url =
            Url::parse(url).map_err(|e| CrsMapError::InvalidQuery(format!("{}: {}", url, e)))?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            search: self.search.clone(),
        }
    }

    /// Link to this state; `search` is left out when empty
    pub fn href(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &self.page.to_string());
        if self.has_search() {
            query.append_pair("search", &self.search);
        }
        format!("?{}", query.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_query() {
        assert_eq!(PageState::from_query(""), PageState::new(1, ""));
        assert_eq!(PageState::from_query("?"), PageState::new(1, ""));
    }

    #[test]
    fn test_reads_page_and_search() {
        let state = PageState::from_query("?page=3&search=utm+zone%2033N");
        assert_eq!(state.page, 3);
        assert_eq!(state.search, "utm zone 33N");
    }

    #[test]
    fn test_bad_page_falls_back_to_first() {
        assert_eq!(PageState::from_query("page=abc").page, 1);
        assert_eq!(PageState::from_query("page=-2").page, 1);
        assert_eq!(PageState::from_query("page=0").page, 0);
    }

    #[test]
    fn test_from_full_url() {
        let state = PageState::from_url("https://crs.example/list/?search=merc&page=2").unwrap();
        assert_eq!(state, PageState::new(2, "merc"));
        assert!(matches!(
            PageState::from_url("not a url"),
            Err(CrsMapError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_href_omits_empty_search() {
        assert_eq!(PageState::new(2, "").href(), "?page=2");
        assert_eq!(PageState::new(2, "web merc").href(), "?page=2&search=web+merc");
    }

    #[test]
    fn test_href_parses_back() {
        let state = PageState::new(7, "Lambert & co");
        assert_eq!(PageState::from_query(&state.href()), state);
    }
}
