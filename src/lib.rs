//! Image Filter App page enhancements (web-sys + WASM)
//!
//! Decorates the server-rendered upload page: filename label and inline
//! preview for the file input, single-selection highlighting for the filter
//! options, and a loading indicator on form submission. Every element is
//! looked up once at startup; whatever the markup does not carry is skipped.

mod dom;
mod filters;
mod submit;
mod upload;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // The module is loaded after the document is parsed, so the markup the
    // enhancers look for is already in place.
    let Some(document) = dom::document() else {
        return;
    };

    upload::install(&document);
    filters::install(&document);
    submit::install(&document);
}
