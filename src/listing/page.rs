//! Pagination of the reference list.
//!
//! A page holds [`PAGE_SIZE`] records shown in two columns. The columns are
//! cut at offsets `(page - 1) * 50` and `(page - 0.5) * 50`, 25 records each,
//! so together they cover the conventional page. Pages outside the list are
//! simply empty.

use crate::core::constants::{HALF_PAGE_SIZE, PAGE_SIZE};
use crate::data::record::CrsRecord;
use crate::listing::{filter::SearchFilter, query::PageState};

/// A pagination affordance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
}

impl PageLink {
    fn to(state: &PageState, page: usize) -> Self {
        Self {
            page,
            href: state.with_page(page).href(),
        }
    }
}

/// Previous/next links; `None` means hidden and disabled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

/// A record as shown in the list
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry<'a> {
    pub record: &'a CrsRecord,
    pub href: String,
    pub label: String,
}

/// What one page of the reference list shows
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub state: PageState,
    /// Number of records passing the search
    pub total: usize,
    pub max_pages: usize,
    pub left: Vec<&'a CrsRecord>,
    pub right: Vec<&'a CrsRecord>,
    pub links: PageLinks,
}

impl<'a> PageView<'a> {
    /// Both columns, left first
    pub fn visible(&self) -> impl Iterator<Item = &'a CrsRecord> + '_ {
        self.left.iter().chain(self.right.iter()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Visible records with their reference links
    pub fn entries(&self, home_dir: &str) -> Vec<ListEntry<'a>> {
        self.visible()
            .map(|record| ListEntry {
                record,
                href: record.href(home_dir),
                label: record.label(),
            })
            .collect()
    }
}

/// `ceil(total / PAGE_SIZE)`
pub fn max_pages(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Start index of a column; `half` shifts it by half a page.
/// Page 0 has no offset and therefore no records.
fn column_offset(page: usize, half: bool) -> Option<usize> {
    if page == 0 {
        return None;
    }
    let shift = if half { 0.5 } else { 1.0 };
    Some(((page as f64 - shift) * PAGE_SIZE as f64) as usize)
}

fn column<'a>(records: &[&'a CrsRecord], offset: Option<usize>) -> Vec<&'a CrsRecord> {
    match offset {
        Some(start) => records.iter().skip(start).take(HALF_PAGE_SIZE).copied().collect(),
        None => Vec::new(),
    }
}

/// Links for `state.page` among `max_pages` pages
pub fn page_links(state: &PageState, max_pages: usize) -> PageLinks {
    PageLinks {
        previous: (state.page > 1).then(|| PageLink::to(state, state.page - 1)),
        next: (state.page < max_pages).then(|| PageLink::to(state, state.page + 1)),
    }
}

/// Applies the search, cuts the requested page into its two columns and
/// works out the navigation links.
pub fn filter_and_paginate<'a>(
    records: &'a [CrsRecord],
    search: &str,
    page: usize,
) -> PageView<'a> {
    let filter = SearchFilter::new(search);
    let filtered = filter.apply(records);
    let total = filtered.len();
    let max_pages = max_pages(total);
    let state = PageState::new(page, search);

    let left = column(&filtered, column_offset(page, false));
    let right = column(&filtered, column_offset(page, true));
    let links = page_links(&state, max_pages);

    log::debug!(
        "page {} of {} for {:?}: {} of {} records visible",
        page,
        max_pages,
        search,
        left.len() + right.len(),
        total
    );

    PageView {
        state,
        total,
        max_pages,
        left,
        right,
        links,
    }
}
