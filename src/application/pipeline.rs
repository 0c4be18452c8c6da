use std::cell::Cell;

use crate::application::view::{CatalogView, StatusMessage};
use crate::domain::catalog::{CatalogRepository, FetchOutcome, Filter, ItemCard, PageRequest};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info, log_warn};

/// Where a pipeline run gets its ids from.
#[derive(Debug, Clone, PartialEq)]
pub enum IdSource {
    Page(PageRequest),
    Filter(Filter),
}

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineReport {
    Rendered(usize),
    NoItems,
    Failed,
    /// A newer run started while this one was waiting; its response was dropped.
    Superseded,
}

/// Ticket taken by a pipeline run when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the newest one may touch the view.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Fetch ids from `source`, resolve them to items and render the cards.
///
/// The view must already be cleared and showing the spinner. The spinner is hidden once the
/// final response of the run arrives, whatever it holds.
pub async fn run_pipeline<R, V>(
    repository: &R,
    view: &V,
    sequencer: &RequestSequencer,
    source: IdSource,
) -> PipelineReport
where
    R: CatalogRepository,
    V: CatalogView,
{
    let ticket = sequencer.begin();
    log_debug!(
        LogComponent::Application("Pipeline"),
        "Run {:?} for {:?}",
        ticket,
        source
    );

    let ids = match &source {
        IdSource::Page(page) => repository.fetch_ids_page(*page).await,
        IdSource::Filter(filter) => repository.filter_items(filter).await,
    };
    if !sequencer.is_current(ticket) {
        return superseded(ticket);
    }

    let items = match ids {
        FetchOutcome::Loaded(ids) => {
            let items = repository.fetch_items_by_ids(&ids).await;
            if !sequencer.is_current(ticket) {
                return superseded(ticket);
            }
            items
        }
        FetchOutcome::Empty => FetchOutcome::Empty,
        FetchOutcome::Failed(err) => FetchOutcome::Failed(err),
    };

    view.set_loading(false);
    match items {
        FetchOutcome::Loaded(items) => {
            let count = items.len();
            for item in &items {
                view.append_card(ItemCard::from(item));
            }
            view.show_message(StatusMessage::None);
            log_info!(
                LogComponent::Application("Pipeline"),
                "Rendered {} cards",
                count
            );
            PipelineReport::Rendered(count)
        }
        FetchOutcome::Empty => {
            view.show_message(StatusMessage::NoItemsFound);
            PipelineReport::NoItems
        }
        FetchOutcome::Failed(err) => {
            log_warn!(
                LogComponent::Application("Pipeline"),
                "Showing reload prompt: {}",
                err
            );
            view.show_message(StatusMessage::FetchFailed);
            PipelineReport::Failed
        }
    }
}

fn superseded(ticket: RequestTicket) -> PipelineReport {
    log_debug!(
        LogComponent::Application("Pipeline"),
        "Dropping stale response for {:?}",
        ticket
    );
    PipelineReport::Superseded
}
