use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::application::view::{CatalogView, StatusMessage};
use crate::domain::catalog::{FilterInput, ItemCard};
use crate::domain::errors::CatalogError;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};
#[cfg(target_arch = "wasm32")]
use crate::presentation::card::mount_card;

pub const ITEMS_SELECTOR: &str = ".items";
pub const SPINNER_SELECTOR: &str = ".spinner";
pub const MESSAGE_SELECTOR: &str = ".message";
pub const PREV_BUTTON_SELECTOR: &str = ".prev-page-link";
pub const NEXT_BUTTON_SELECTOR: &str = ".next-page-link";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter__button";
pub const RESET_BUTTON_SELECTOR: &str = ".reset__button";
pub const FILTER_INPUT_SELECTOR: &str = ".form-control";

const HIDDEN_CLASS: &str = "hidden";
const DISABLED_CLASS: &str = "disabled";

const RELOAD_PROMPT_HTML: &str = "Fetch error, please <button onclick='window.location.reload()' class=\"btn btn-primary filter__button\">reload page</button>";

/// First element matching `selector`, or a `Browser` error naming it.
pub fn query(document: &Document, selector: &str) -> Result<Element, CatalogError> {
    let found = document.query_selector(selector).map_err(|e| {
        CatalogError::Browser(format!("Invalid selector {}: {:?}", selector, e))
    })?;
    found.ok_or_else(|| {
        CatalogError::Browser(format!("Element '{}' not found in DOM", selector))
    })
}

/// Sets or removes `class` on `element`, logging DOM failures.
fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log_warn!(
            LogComponent::Presentation("DomView"),
            "⚠️ Failed to toggle '{}': {:?}",
            class,
            e
        );
    }
}

/// `CatalogView` over the static page markup.
pub struct DomCatalogView {
    document: Document,
    items: HtmlElement,
    spinner: Element,
    message: Element,
    prev_button: Element,
}

impl DomCatalogView {
    /// Looks up the results container, spinner, message area and prev link.
    pub fn attach(document: &Document) -> Result<Self, CatalogError> {
        let Ok(items) = query(document, ITEMS_SELECTOR)?.dyn_into::<HtmlElement>() else {
            let message = "Results container is not an HTML element";
            return Err(CatalogError::Browser(message.to_string()));
        };

        Ok(Self {
            document: document.clone(),
            items,
            spinner: query(document, SPINNER_SELECTOR)?,
            message: query(document, MESSAGE_SELECTOR)?,
            prev_button: query(document, PREV_BUTTON_SELECTOR)?,
        })
    }

    fn inputs(&self) -> Vec<HtmlInputElement> {
        let nodes = match self.document.query_selector_all(FILTER_INPUT_SELECTOR) {
            Ok(nodes) => nodes,
            Err(e) => {
                log_warn!(
                    LogComponent::Presentation("DomView"),
                    "⚠️ Failed to query filter inputs: {:?}",
                    e
                );
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }
}

impl CatalogView for DomCatalogView {
    fn clear_items(&self) {
        self.items.set_inner_html("");
    }

    fn append_card(&self, card: ItemCard) {
        #[cfg(target_arch = "wasm32")]
        if let Err(e) = mount_card(&self.items, card) {
            log_warn!(LogComponent::Presentation("DomView"), "⚠️ {}", e);
        }
    }

    fn set_loading(&self, loading: bool) {
        toggle_class(&self.spinner, HIDDEN_CLASS, !loading);
    }

    fn show_message(&self, message: StatusMessage) {
        match message {
            StatusMessage::None => self.message.set_inner_html(""),
            StatusMessage::NoItemsFound => self.message.set_text_content(Some(message.text())),
            StatusMessage::FetchFailed => self.message.set_inner_html(RELOAD_PROMPT_HTML),
        }
    }

    fn set_prev_enabled(&self, enabled: bool) {
        toggle_class(&self.prev_button, DISABLED_CLASS, !enabled);
    }

    fn filter_inputs(&self) -> Vec<FilterInput> {
        self.inputs()
            .into_iter()
            .filter_map(|input| {
                let key = input.get_attribute("data-filter")?;
                Some(FilterInput::new(key, input.value()))
            })
            .collect()
    }

    fn clear_filter_inputs(&self) {
        let inputs = self.inputs();
        log_debug!(
            LogComponent::Presentation("DomView"),
            "Clearing {} filter inputs",
            inputs.len()
        );
        for input in inputs {
            input.set_value("");
        }
    }
}
