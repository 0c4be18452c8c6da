#![cfg(target_arch = "wasm32")]

use catalog_viewer_wasm::application::{CatalogView, StatusMessage};
use catalog_viewer_wasm::domain::catalog::{FilterInput, ItemCard};
use catalog_viewer_wasm::presentation::DomCatalogView;
use catalog_viewer_wasm::presentation::card::mount_card;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
    <a class="page-link prev-page-link disabled" href="#">Prev</a>
    <a class="page-link next-page-link" href="#">Next</a>
    <input class="form-control" data-filter="product" value="">
    <input class="form-control" data-filter="price" value="100">
    <input class="form-control" data-filter="brand" value="Piaget">
    <div class="spinner"></div>
    <div class="message"></div>
    <div class="items"></div>
"##;

fn setup() -> (Document, DomCatalogView) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(PAGE);
    let view = DomCatalogView::attach(&document).unwrap();
    (document, view)
}

fn find(document: &Document, selector: &str) -> Element {
    document.query_selector(selector).unwrap().unwrap()
}

fn count(document: &Document, selector: &str) -> u32 {
    document.query_selector_all(selector).unwrap().length()
}

fn card(brand: Option<&str>) -> ItemCard {
    ItemCard {
        id: "1789ecf3".to_string(),
        product: "Золотое кольцо".to_string(),
        price: "16700".to_string(),
        brand: brand.map(str::to_string),
    }
}

#[wasm_bindgen_test]
fn card_without_brand_has_single_list_item() {
    let (document, view) = setup();
    view.append_card(card(None));
    view.append_card(card(Some("Piaget")));

    assert_eq!(count(&document, ".items > .card"), 2);
    assert_eq!(count(&document, ".list-group-item"), 3);
    let text = find(&document, ".items").text_content().unwrap();
    assert!(text.contains("Brand: Piaget"));

    view.clear_items();
    assert_eq!(count(&document, ".items > .card"), 0);
}

#[wasm_bindgen_test]
fn spinner_message_and_prev_state() {
    let (document, view) = setup();
    let spinner = find(&document, ".spinner");
    let prev = find(&document, ".prev-page-link");
    let message = find(&document, ".message");

    view.set_loading(false);
    assert!(spinner.class_list().contains("hidden"));
    view.set_loading(true);
    assert!(!spinner.class_list().contains("hidden"));

    view.set_prev_enabled(true);
    assert!(!prev.class_list().contains("disabled"));
    view.set_prev_enabled(false);
    assert!(prev.class_list().contains("disabled"));

    view.show_message(StatusMessage::NoItemsFound);
    assert_eq!(message.text_content().unwrap(), "No items found");
    view.show_message(StatusMessage::FetchFailed);
    assert!(message.query_selector("button").unwrap().is_some());
    view.show_message(StatusMessage::None);
    assert_eq!(message.inner_html(), "");
}

#[wasm_bindgen_test]
fn filter_inputs_are_read_and_cleared() {
    let (_document, view) = setup();
    assert_eq!(
        view.filter_inputs(),
        vec![
            FilterInput::new("product", ""),
            FilterInput::new("price", "100"),
            FilterInput::new("brand", "Piaget"),
        ]
    );
    view.clear_filter_inputs();
    assert!(view.filter_inputs().iter().all(|input| input.is_blank()));
}

#[wasm_bindgen_test]
fn cards_mount_into_container_and_clear_away() {
    let (document, view) = setup();
    let items: HtmlElement = find(&document, ".items").dyn_into().unwrap();

    for _ in 0..50 {
        mount_card(&items, card(Some("Piaget"))).unwrap();
    }
    assert_eq!(items.child_element_count(), 50);

    view.clear_items();
    assert_eq!(items.child_element_count(), 0);
    view.append_card(card(None));
    assert_eq!(items.child_element_count(), 1);
}
