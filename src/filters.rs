//! Filter picker: keeps exactly one option highlighted and mirrors the
//! choice into the hidden field the form posts.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::dom;

/// Wires every `.filter-option` on the page. Skipped entirely unless the
/// option set is non-empty and the hidden field exists.
pub fn install(document: &Document) {
    let options = dom::all_matches(document, ".filter-option");
    let Some(field) = dom::by_id::<HtmlInputElement>(document, "selected-filter") else {
        return;
    };
    if options.is_empty() {
        return;
    }

    for option in &options {
        let peers = options.clone();
        let field = field.clone();
        let clicked = option.clone();
        let onclick = Closure::wrap(Box::new(move |_: web_sys::Event| {
            // Clear every peer before marking the clicked one, so at most one
            // option is active whatever the click sequence.
            for peer in &peers {
                let _ = peer.class_list().remove_1("active");
            }
            let _ = clicked.class_list().add_1("active");
            field.set_value(&clicked.dataset().get("filter").unwrap_or_default());
        }) as Box<dyn FnMut(_)>);
        option.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page(html: &str) -> Document {
        let document = dom::document().expect("no document");
        document.body().expect("no body").set_inner_html(html);
        document
    }

    fn filter_page() -> Document {
        page(
            r#"<div class="filter-option" data-filter="grayscale">Grayscale</div>
               <div class="filter-option" data-filter="blur">Blur</div>
               <div class="filter-option" data-filter="sepia">Sepia</div>
               <input type="hidden" id="selected-filter">"#,
        )
    }

    fn active_options(document: &Document) -> Vec<HtmlElement> {
        dom::all_matches(document, ".filter-option.active")
    }

    fn field_value(document: &Document) -> String {
        dom::by_id::<HtmlInputElement>(document, "selected-filter")
            .unwrap()
            .value()
    }

    #[wasm_bindgen_test]
    fn last_clicked_option_wins() {
        let document = filter_page();
        install(&document);

        let options = dom::all_matches(&document, ".filter-option");
        options[1].click();
        options[0].click();

        let active = active_options(&document);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].dataset().get("filter").unwrap(), "grayscale");
        assert_eq!(field_value(&document), "grayscale");
    }

    #[wasm_bindgen_test]
    fn clicking_the_same_option_twice_is_idempotent() {
        let document = filter_page();
        install(&document);

        let options = dom::all_matches(&document, ".filter-option");
        options[2].click();
        options[2].click();

        assert_eq!(active_options(&document).len(), 1);
        assert_eq!(field_value(&document), "sepia");
    }

    #[wasm_bindgen_test]
    fn no_clicks_leaves_the_field_unset() {
        let document = filter_page();
        install(&document);

        assert!(active_options(&document).is_empty());
        assert_eq!(field_value(&document), "");
    }

    #[wasm_bindgen_test]
    fn missing_data_attribute_yields_an_empty_value() {
        let document = page(
            r#"<div class="filter-option">Mystery</div>
               <input type="hidden" id="selected-filter" value="sepia">"#,
        );
        install(&document);

        dom::all_matches(&document, ".filter-option")[0].click();
        assert_eq!(field_value(&document), "");
    }

    #[wasm_bindgen_test]
    fn install_without_the_hidden_field_is_a_no_op() {
        let document = page(r#"<div class="filter-option" data-filter="blur">Blur</div>"#);
        install(&document);

        dom::all_matches(&document, ".filter-option")[0].click();
        assert!(active_options(&document).is_empty());
    }
}
