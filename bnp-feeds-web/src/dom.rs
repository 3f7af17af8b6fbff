//! DOM page port

use bnp_feeds::{Fragment, Node, UiPort};
use web_sys::{Document, Element};

/// [`UiPort`] over the live document
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn build(&self, fragment: &Fragment) -> Result<Element, wasm_bindgen::JsValue> {
        let element = self.document.create_element(fragment.tag())?;
        for (name, value) in fragment.attributes() {
            element.set_attribute(name, value)?;
        }
        for child in fragment.children() {
            match child {
                Node::Element(inner) => {
                    let inner = self.build(inner)?;
                    element.append_child(&inner)?;
                }
                Node::Markup(markup) => {
                    element.insert_adjacent_html("beforeend", markup)?;
                }
            }
        }
        Ok(element)
    }
}

impl UiPort for DomPage {
    fn append_child(&self, container_id: &str, fragment: Fragment) {
        let Some(container) = self.element(container_id) else {
            return;
        };
        let result = self
            .build(&fragment)
            .and_then(|element| container.append_child(&element));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("Cannot render into #{}: {:?}", container_id, e).into());
        }
    }

    fn set_text(&self, region_id: &str, text: &str) {
        if let Some(region) = self.element(region_id) {
            region.set_text_content(Some(text));
        }
    }

    fn set_hidden(&self, element_id: &str, hidden: bool) {
        let Some(element) = self.element(element_id) else {
            return;
        };
        let result = if hidden {
            element.set_attribute("hidden", "hidden")
        } else {
            element.remove_attribute("hidden")
        };
        if let Err(e) = result {
            web_sys::console::error_1(&format!("Cannot toggle #{}: {:?}", element_id, e).into());
        }
    }

    fn text_content(&self, element_id: &str) -> Option<String> {
        self.element(element_id).and_then(|e| e.text_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnp_feeds::ids;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page_with(element_ids: &[&str]) -> DomPage {
        let page = DomPage::from_window().unwrap();
        let body = page.document.body().unwrap();
        body.set_inner_html("");
        for id in element_ids {
            let div = page.document.create_element("div").unwrap();
            div.set_id(id);
            body.append_child(&div).unwrap();
        }
        page
    }

    #[wasm_bindgen_test]
    fn test_append_builds_elements() {
        let page = page_with(&[ids::ENTRIES]);
        let fragment = Fragment::new("div")
            .attr("entryid", "7")
            .child(Fragment::new("hr").class("line"))
            .markup("<b>hi</b>");

        page.append_child(ids::ENTRIES, fragment);

        let container = page.element(ids::ENTRIES).unwrap();
        assert_eq!(
            container.inner_html(),
            "<div entryid=\"7\"><hr class=\"line\"><b>hi</b></div>"
        );
    }

    #[wasm_bindgen_test]
    fn test_set_text_and_hidden() {
        let page = page_with(&[ids::MESSAGES, ids::APPEND_DIARY]);

        page.set_text(ids::MESSAGES, "Cannot post. Try again later.");
        page.set_hidden(ids::APPEND_DIARY, true);

        assert_eq!(
            page.text_content(ids::MESSAGES).as_deref(),
            Some("Cannot post. Try again later.")
        );
        assert!(page.element(ids::APPEND_DIARY).unwrap().has_attribute("hidden"));
    }

    #[wasm_bindgen_test]
    fn test_missing_container_is_ignored() {
        let page = page_with(&[]);
        page.append_child(ids::PRIVATE_ENTRIES, Fragment::new("p"));
        assert_eq!(page.text_content(ids::PROFILE_ID), None);
    }
}
