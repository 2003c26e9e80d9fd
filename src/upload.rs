//! Upload enhancer: filename label, inline preview, optional auto-submit.

use std::cell::Cell;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, File, FileReader, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    ProgressEvent,
};

use crate::dom;

/// Longest filename shown in the label before truncation kicks in.
const LABEL_LIMIT: usize = 20;

/// Wires the file input if the page carries one. The filename label and the
/// preview container are optional collaborators, resolved once here.
pub fn install(document: &Document) {
    let Some(input) = dom::by_id::<HtmlInputElement>(document, "image-upload") else {
        return;
    };

    let label = dom::first_match(document, ".file-label");
    let container = document.get_element_by_id("preview-container");
    let generation = Rc::new(Cell::new(0u64));

    let document = document.clone();
    let input_ref = input.clone();
    let onchange = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let Some(file) = input_ref.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Some(label) = &label {
            label.set_text_content(Some(&display_name(&file.name())));
        }

        if let Some(container) = &container {
            container.set_inner_html("");
            generation.set(generation.get() + 1);
            start_preview(&document, container, &file, Rc::clone(&generation));
        }

        // Pages can opt into submitting as soon as a file is picked.
        if let Some(form) = auto_submit_form(&input_ref) {
            let _ = form.submit();
        }
    }) as Box<dyn FnMut(_)>);

    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();
}

fn display_name(name: &str) -> String {
    if name.chars().count() > LABEL_LIMIT {
        let head: String = name.chars().take(LABEL_LIMIT).collect();
        format!("{head}...")
    } else {
        name.to_owned()
    }
}

fn auto_submit_form(input: &HtmlInputElement) -> Option<HtmlFormElement> {
    input
        .closest("form[data-auto-submit]")
        .ok()
        .flatten()?
        .dyn_into::<HtmlFormElement>()
        .ok()
}

/// Reads `file` as a data URI and appends the preview `<img>` once the
/// browser finishes. A read that completes after a newer selection bumped
/// `generation` is stale and is dropped instead of rendered.
fn start_preview(document: &Document, container: &Element, file: &File, generation: Rc<Cell<u64>>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let started = generation.get();
    let document = document.clone();
    let container = container.clone();
    let reader_ref = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        if generation.get() != started {
            console::debug!("dropping stale preview read");
            return;
        }

        let Some(data_url) = reader_ref.result().ok().and_then(|value| value.as_string()) else {
            return;
        };
        let Some(img) = document
            .create_element("img")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        img.set_src(&data_url);
        img.set_class_name("preview-image");
        let _ = container.append_child(&img);
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = reader.read_as_data_url(file);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through() {
        assert_eq!(display_name("cat.png"), "cat.png");
    }

    #[test]
    fn twenty_chars_is_not_truncated() {
        let name = "12345678901234567890";
        assert_eq!(name.len(), 20);
        assert_eq!(display_name(name), name);
    }

    #[test]
    fn long_names_keep_first_twenty_chars_plus_marker() {
        assert_eq!(
            display_name("vacation-photo-2024.png"),
            "vacation-photo-2024...."
        );
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let name = "写真".repeat(12);
        let shown = display_name(&name);
        assert_eq!(shown, format!("{}...", "写真".repeat(10)));
    }
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

    #[wasm_bindgen_test]
    fn change_without_a_file_leaves_the_page_alone() {
        let document = page(
            r#"<input type="file" id="image-upload">
               <span class="file-label">No file chosen</span>
               <div id="preview-container"><img class="preview-image"></div>"#,
        );
        install(&document);

        let input: HtmlInputElement = dom::by_id(&document, "image-upload").unwrap();
        let event = web_sys::Event::new("change").unwrap();
        input.dispatch_event(&event).unwrap();

        let label = dom::first_match(&document, ".file-label").unwrap();
        assert_eq!(label.text_content().unwrap(), "No file chosen");
        let container = document.get_element_by_id("preview-container").unwrap();
        assert_eq!(container.child_element_count(), 1);
    }

    #[wasm_bindgen_test]
    fn install_without_the_input_is_a_no_op() {
        let document = page("<p>nothing to enhance</p>");
        install(&document);
    }
}
