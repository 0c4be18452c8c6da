#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use catalog_viewer_wasm::application::{CatalogView, StatusMessage};
use catalog_viewer_wasm::domain::catalog::{
    CatalogRepository, FetchOutcome, Filter, FilterField, FilterInput, Item, ItemCard, ItemId,
    PageRequest,
};
use catalog_viewer_wasm::domain::errors::CatalogError;
use futures::channel::oneshot;
use serde_json::Value;

pub const IDS_PER_RESPONSE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Items(Vec<ItemId>),
    Fields(FilterField),
    Ids(PageRequest),
    Filter(Filter),
}

pub fn item(id: &str, brand: Option<&str>) -> Item {
    Item {
        id: ItemId::from(id),
        product: format!("Product {}", id),
        price: 1000.0,
        brand: brand.map(str::to_string),
    }
}

pub fn server_error() -> CatalogError {
    CatalogError::HttpStatus {
        status: 500,
        status_text: "Internal Server Error".to_string(),
    }
}

/// Repository that answers from scripted queues and records every call.
///
/// With empty queues it answers `get_ids` with three ids derived from the offset and
/// `get_items` with one item per requested id.
#[derive(Default)]
pub struct FakeRepository {
    pub calls: RefCell<Vec<Call>>,
    pub ids: RefCell<VecDeque<FetchOutcome<ItemId>>>,
    pub items: RefCell<VecDeque<FetchOutcome<Item>>>,
    /// Gates for successive id requests; a request waits until its gate fires.
    pub id_gates: RefCell<VecDeque<Option<oneshot::Receiver<()>>>>,
}

impl FakeRepository {
    pub fn script_ids(self, outcome: FetchOutcome<ItemId>) -> Self {
        self.ids.borrow_mut().push_back(outcome);
        self
    }

    pub fn script_items(self, outcome: FetchOutcome<Item>) -> Self {
        self.items.borrow_mut().push_back(outcome);
        self
    }

    pub fn gate_next_ids(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.id_gates.borrow_mut().push_back(Some(rx));
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Ids(page) => Some(page),
                _ => None,
            })
            .collect()
    }

    async fn wait_for_gate(&self) {
        let gate = self.id_gates.borrow_mut().pop_front().flatten();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    fn ids_for(&self, prefix: &str) -> FetchOutcome<ItemId> {
        let scripted = self.ids.borrow_mut().pop_front();
        scripted.unwrap_or_else(|| {
            let id = |i: usize| ItemId::from(format!("{}-{}", prefix, i));
            FetchOutcome::Loaded((0..IDS_PER_RESPONSE).map(id).collect())
        })
    }
}

impl CatalogRepository for FakeRepository {
    async fn fetch_items_by_ids(&self, ids: &[ItemId]) -> FetchOutcome<Item> {
        self.calls.borrow_mut().push(Call::Items(ids.to_vec()));
        let scripted = self.items.borrow_mut().pop_front();
        scripted.unwrap_or_else(|| {
            let items = ids.iter().map(|id| item(id.value(), Some("Baraka")));
            FetchOutcome::from_records(items.collect())
        })
    }

    async fn fetch_field_values(&self, field: FilterField) -> FetchOutcome<Value> {
        self.calls.borrow_mut().push(Call::Fields(field));
        FetchOutcome::Empty
    }

    async fn fetch_ids_page(&self, page: PageRequest) -> FetchOutcome<ItemId> {
        self.calls.borrow_mut().push(Call::Ids(page));
        self.wait_for_gate().await;
        self.ids_for(&format!("id-{}", page.offset))
    }

    async fn filter_items(&self, filter: &Filter) -> FetchOutcome<ItemId> {
        self.calls.borrow_mut().push(Call::Filter(filter.clone()));
        self.wait_for_gate().await;
        self.ids_for("filtered")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ClearItems,
    Card(ItemCard),
    Loading(bool),
    Message(StatusMessage),
    PrevEnabled(bool),
    ClearInputs,
}

/// View that records what the controller did to the page.
#[derive(Default)]
pub struct RecordingView {
    pub events: RefCell<Vec<ViewEvent>>,
    pub inputs: RefCell<Vec<FilterInput>>,
}

impl RecordingView {
    pub fn with_inputs(inputs: Vec<FilterInput>) -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            inputs: RefCell::new(inputs),
        }
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Cards currently in the container, i.e. appended after the last clear.
    pub fn cards(&self) -> Vec<ItemCard> {
        let events = self.events.borrow();
        let last_clear = events.iter().rposition(|e| *e == ViewEvent::ClearItems);
        let start = last_clear.map_or(0, |i| i + 1);
        events[start..]
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Card(card) => Some(card.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn message(&self) -> StatusMessage {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Message(message) => Some(*message),
                _ => None,
            })
            .unwrap_or(StatusMessage::None)
    }

    pub fn loading(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Loading(loading) => Some(*loading),
            _ => None,
        })
    }

    pub fn prev_enabled(&self) -> Option<bool> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::PrevEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl CatalogView for RecordingView {
    fn clear_items(&self) {
        self.record(ViewEvent::ClearItems);
    }

    fn append_card(&self, card: ItemCard) {
        self.record(ViewEvent::Card(card));
    }

    fn set_loading(&self, loading: bool) {
        self.record(ViewEvent::Loading(loading));
    }

    fn show_message(&self, message: StatusMessage) {
        self.record(ViewEvent::Message(message));
    }

    fn set_prev_enabled(&self, enabled: bool) {
        self.record(ViewEvent::PrevEnabled(enabled));
    }

    fn filter_inputs(&self) -> Vec<FilterInput> {
        self.inputs.borrow().clone()
    }

    fn clear_filter_inputs(&self) {
        for input in self.inputs.borrow_mut().iter_mut() {
            input.value.clear();
        }
        self.record(ViewEvent::ClearInputs);
    }
}
