use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::application::controller::CatalogController;
use crate::config::CatalogConfig;
use crate::domain::catalog::Pagination;
use crate::domain::errors::CatalogError;
use crate::domain::logging::LogComponent;
use crate::infrastructure::http::CatalogApiClient;
use crate::log_info;
use crate::presentation::dom_view::{
    DomCatalogView, FILTER_BUTTON_SELECTOR, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR,
    RESET_BUTTON_SELECTOR, query,
};

type BrowserController = CatalogController<CatalogApiClient, DomCatalogView>;

/// Runs `handler` on every click of the element matching `selector`.
///
/// The listener lives for the rest of the page.
pub fn on_click(
    document: &Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), CatalogError> {
    let element = query(document, selector)?;
    EventListener::new(&element, "click", move |event| {
        event.prevent_default();
        handler();
    })
    .forget();
    Ok(())
}

/// Binds the paging and filter buttons, then loads the first page.
pub fn mount_catalog(config: CatalogConfig) -> Result<(), CatalogError> {
    let Some(window) = web_sys::window() else {
        return Err(CatalogError::Browser("Window not available".to_string()));
    };
    let Some(document) = window.document() else {
        return Err(CatalogError::Browser("Document not available".to_string()));
    };

    let view = DomCatalogView::attach(&document)?;
    let client = CatalogApiClient::new(&config);
    log_info!(
        LogComponent::Presentation("Bindings"),
        "📡 Catalog endpoint {}",
        client.endpoint()
    );

    let pagination = Pagination::new(config.page_size);
    let controller = CatalogController::with_pagination(client, view, pagination);
    let controller: Rc<BrowserController> = Rc::new(controller);

    bind(&document, NEXT_BUTTON_SELECTOR, &controller, |c| async move {
        c.next_page().await;
    })?;
    bind(&document, PREV_BUTTON_SELECTOR, &controller, |c| async move {
        c.prev_page().await;
    })?;
    bind(&document, FILTER_BUTTON_SELECTOR, &controller, |c| async move {
        c.apply_filter().await;
    })?;
    bind(&document, RESET_BUTTON_SELECTOR, &controller, |c| async move {
        c.reset_filter().await;
    })?;

    spawn_local(async move {
        controller.load_initial().await;
    });
    Ok(())
}

fn bind<F, Fut>(
    document: &Document,
    selector: &str,
    controller: &Rc<BrowserController>,
    action: F,
) -> Result<(), CatalogError>
where
    F: Fn(Rc<BrowserController>) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let controller = Rc::clone(controller);
    on_click(document, selector, move || {
        spawn_local(action(Rc::clone(&controller)))
    })
}
