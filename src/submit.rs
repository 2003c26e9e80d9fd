//! Submit feedback: reveal the per-form loading indicator and disable the
//! submit button so a slow server round-trip cannot be double-submitted.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::dom;

/// Wires every form on the page. The indicator and the button are both
/// optional; native submission proceeds either way.
pub fn install(document: &Document) {
    for form in dom::all_matches(document, "form") {
        let form_ref = form.clone();
        let onsubmit = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(loading) = descendant::<HtmlElement>(&form_ref, ".loading") {
                let _ = loading.style().set_property("display", "flex");
            }
            if let Some(button) = descendant::<HtmlButtonElement>(&form_ref, "button[type=submit]")
            {
                button.set_disabled(true);
            }
        }) as Box<dyn FnMut(_)>);
        form.set_onsubmit(Some(onsubmit.as_ref().unchecked_ref()));
        onsubmit.forget();
    }
}

fn descendant<T: JsCast>(form: &HtmlElement, selector: &str) -> Option<T> {
    form.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page(html: &str) -> Document {
        let document = dom::document().expect("no document");
        document.body().expect("no body").set_inner_html(html);
        document
    }

    fn submit(form: &HtmlElement) {
        // A synthetic submit event runs the handler without navigating.
        let event = web_sys::Event::new("submit").unwrap();
        form.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn shows_the_indicator_and_disables_the_button() {
        let document = page(
            r#"<form action="/upload" method="post">
                 <div class="loading" style="display: none">Processing...</div>
                 <button type="submit">Upload</button>
               </form>"#,
        );
        install(&document);

        let form = dom::all_matches(&document, "form").remove(0);
        submit(&form);

        let loading = descendant::<HtmlElement>(&form, ".loading").unwrap();
        assert_eq!(loading.style().get_property_value("display").unwrap(), "flex");
        let button = descendant::<HtmlButtonElement>(&form, "button[type=submit]").unwrap();
        assert!(button.disabled());
    }

    #[wasm_bindgen_test]
    fn bare_forms_submit_without_error() {
        let document = page(r#"<form action="/upload" method="post"></form>"#);
        install(&document);

        let form = dom::all_matches(&document, "form").remove(0);
        submit(&form);
    }

    #[wasm_bindgen_test]
    fn each_form_only_touches_its_own_elements() {
        let document = page(
            r#"<form id="first"><button type="submit">Go</button></form>
               <form id="second"><button type="submit">Go</button></form>"#,
        );
        install(&document);

        let forms = dom::all_matches(&document, "form");
        submit(&forms[0]);

        let first = descendant::<HtmlButtonElement>(&forms[0], "button[type=submit]").unwrap();
        let second = descendant::<HtmlButtonElement>(&forms[1], "button[type=submit]").unwrap();
        assert!(first.disabled());
        assert!(!second.disabled());
    }
}
