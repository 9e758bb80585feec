//! Browser bindings for the CRS pages.

use crate::{
    core::area::{normalize, AreaOfUse},
    data::catalog::CrsCatalog,
    listing::{page::filter_and_paginate, query::PageState},
};
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// `[[south, west], [north, east]]` for `L.rectangle`, from `[w, s, e, n]`
#[wasm_bindgen(js_name = rectangleBounds)]
pub fn rectangle_bounds(area: Vec<f64>) -> Result<js_sys::Array, JsValue> {
    let [west, south, east, north]: [f64; 4] = area
        .try_into()
        .map_err(|_| JsValue::from_str("area of use needs four numbers"))?;
    let bounds = normalize(&AreaOfUse::new(west, south, east, north));

    Ok(bounds
        .corners()
        .iter()
        .map(|[lat, lng]| js_sys::Array::of2(&JsValue::from_f64(*lat), &JsValue::from_f64(*lng)))
        .collect())
}

/// Page state from `window.location.search`
fn current_page_state() -> Result<PageState, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let search = window.location().search()?;
    Ok(PageState::from_query(&search))
}

/// One page of the reference list as JSON, for the current URL.
/// `records_json` is the body of `crslist.json`.
#[wasm_bindgen(js_name = referencePage)]
pub fn reference_page(records_json: &str, home_dir: &str) -> Result<String, JsValue> {
    let catalog = CrsCatalog::from_json_str(records_json).map_err(js_error)?;
    let state = current_page_state()?;
    let view = filter_and_paginate(catalog.records(), &state.search, state.page);

    let column = |records: &[&crate::data::record::CrsRecord]| {
        records
            .iter()
            .map(|r| json!({ "href": r.href(home_dir), "label": r.label() }))
            .collect::<Vec<_>>()
    };

    let page = json!({
        "page": view.state.page,
        "max_pages": view.max_pages,
        "total": view.total,
        "left": column(&view.left),
        "right": column(&view.right),
        "previous": view.links.previous.as_ref().map(|l| &l.href),
        "next": view.links.next.as_ref().map(|l| &l.href),
    });
    serde_json::to_string(&page).map_err(js_error)
}

/// Offers `href` (a data URI or blob URL) to the user as `filename`
#[wasm_bindgen(js_name = downloadFile)]
pub fn download_file(filename: &str, href: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}
