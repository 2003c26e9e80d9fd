//! Optional-capability DOM lookups shared by the enhancers.
//!
//! The hosting page owns the markup, and every element this crate touches
//! may be absent on any given page. Lookups return `Option` and callers skip
//! the dependent effect when the element is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Lookup by id, downcast to the concrete element type. `None` when the page
/// does not carry the element or it is of an unexpected kind.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn first_match(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn all_matches(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut found = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                found.push(el);
            }
        }
    }
    found
}
