use crate::domain::catalog::{FilterInput, ItemCard};

/// Contents of the message area under the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    None,
    NoItemsFound,
    /// Any failed request; the user is offered a page reload.
    FetchFailed,
}

impl StatusMessage {
    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::None => "",
            StatusMessage::NoItemsFound => "No items found",
            StatusMessage::FetchFailed => "Fetch error, please reload page",
        }
    }
}

/// Everything the controller needs from the page.
///
/// The browser implementation is `presentation::DomCatalogView`.
pub trait CatalogView {
    fn clear_items(&self);
    fn append_card(&self, card: ItemCard);
    fn set_loading(&self, loading: bool);
    fn show_message(&self, message: StatusMessage);
    fn set_prev_enabled(&self, enabled: bool);
    fn filter_inputs(&self) -> Vec<FilterInput>;
    fn clear_filter_inputs(&self);
}
