use std::cell::RefCell;

use crate::application::pipeline::{IdSource, PipelineReport, RequestSequencer, run_pipeline};
use crate::application::view::{CatalogView, StatusMessage};
use crate::domain::catalog::{CatalogRepository, Filter, Pagination};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_info};

/// Drives the page: initial load, next/prev paging, filter apply and reset.
///
/// Handlers take `&self`; the controller is shared as `Rc<CatalogController<..>>` between
/// the button callbacks. No `RefCell` borrow is held across an `.await`.
pub struct CatalogController<R: CatalogRepository, V: CatalogView> {
    repository: R,
    view: V,
    pagination: RefCell<Pagination>,
    sequencer: RequestSequencer,
}

impl<R: CatalogRepository, V: CatalogView> CatalogController<R, V> {
    pub fn new(repository: R, view: V) -> Self {
        Self::with_pagination(repository, view, Pagination::default())
    }

    pub fn with_pagination(repository: R, view: V, pagination: Pagination) -> Self {
        log_info!(
            LogComponent::Application("CatalogController"),
            "Creating catalog controller"
        );
        Self {
            repository,
            view,
            pagination: RefCell::new(pagination),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn offset(&self) -> u32 {
        self.pagination.borrow().offset()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// First page, shown without user action.
    pub async fn load_initial(&self) -> PipelineReport {
        let page = {
            let pagination = self.pagination.borrow();
            self.view.set_prev_enabled(pagination.prev_enabled());
            pagination.current()
        };
        self.begin_loading();
        self.run(IdSource::Page(page)).await
    }

    pub async fn next_page(&self) -> PipelineReport {
        let (page, prev_enabled) = {
            let mut pagination = self.pagination.borrow_mut();
            (pagination.next(), pagination.prev_enabled())
        };
        log_debug!(
            LogComponent::Application("CatalogController"),
            "Next page, offset {}",
            page.offset
        );
        self.view.set_prev_enabled(prev_enabled);
        self.begin_loading();
        self.run(IdSource::Page(page)).await
    }

    /// `None` on the first page; nothing is requested or cleared then.
    pub async fn prev_page(&self) -> Option<PipelineReport> {
        let (page, prev_enabled) = {
            let mut pagination = self.pagination.borrow_mut();
            let page = pagination.prev();
            (page, pagination.prev_enabled())
        };
        self.view.set_prev_enabled(prev_enabled);
        let Some(page) = page else {
            log_debug!(
                LogComponent::Application("CatalogController"),
                "Already on the first page"
            );
            return None;
        };
        log_debug!(
            LogComponent::Application("CatalogController"),
            "Prev page, offset {}",
            page.offset
        );
        self.begin_loading();
        Some(self.run(IdSource::Page(page)).await)
    }

    /// Filters by the current form values. The page offset is left untouched.
    pub async fn apply_filter(&self) -> PipelineReport {
        let filter = Filter::from_inputs(&self.view.filter_inputs());
        log_info!(
            LogComponent::Application("CatalogController"),
            "Applying filter {:?}",
            filter
        );
        self.begin_loading();
        self.run(IdSource::Filter(filter)).await
    }

    /// Clears the form and reloads the current page; `None` when the form was already empty.
    pub async fn reset_filter(&self) -> Option<PipelineReport> {
        let inputs = self.view.filter_inputs();
        if inputs.iter().all(|input| input.is_blank()) {
            return None;
        }
        self.view.clear_filter_inputs();
        let page = self.pagination.borrow().current();
        log_info!(
            LogComponent::Application("CatalogController"),
            "Filters reset, reloading offset {}",
            page.offset
        );
        self.begin_loading();
        Some(self.run(IdSource::Page(page)).await)
    }

    fn begin_loading(&self) {
        self.view.clear_items();
        self.view.show_message(StatusMessage::None);
        self.view.set_loading(true);
    }

    async fn run(&self, source: IdSource) -> PipelineReport {
        run_pipeline(&self.repository, &self.view, &self.sequencer, source).await
    }
}
