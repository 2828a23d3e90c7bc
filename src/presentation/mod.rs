use crate::app::App;
use crate::application::{DashboardCoordinator, Poller, PollingHandle};
use crate::config::DashboardConfig;
use crate::domain::{errors::DomResult, logging::LogComponent};
use crate::infrastructure::{
    BrowserTimeProvider, CanvasLineRenderer, DomCardBoard, HostElementIds, PricesHttpClient,
};
use crate::log_info;

/// Wires config, page, HTTP client and chart into a running poller
pub fn launch() -> DomResult<PollingHandle> {
    let config = DashboardConfig::from_page_globals();
    let ids = HostElementIds::default();
    ensure_shell(&ids);

    let board = DomCardBoard::new(ids.clone())?;
    let surface = CanvasLineRenderer::new(ids.chart_canvas.clone());
    let coordinator = DashboardCoordinator::new(
        config.clone(),
        board,
        surface,
        Box::new(BrowserTimeProvider::new()),
    );
    let repository = PricesHttpClient::new(config.prices_url());

    log_info!(
        LogComponent::Launch,
        "🚀 Polling {} every {} ms for {}",
        repository.prices_url(),
        config.poll_interval_ms,
        config.tickers_label()
    );

    Ok(Poller::new(repository, coordinator).start())
}

/// Mounts the Leptos shell when the host page lacks the cards container
fn ensure_shell(ids: &HostElementIds) {
    let has_host_markup = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&ids.cards))
        .is_some();

    if !has_host_markup {
        log_info!(LogComponent::Launch, "No host markup, mounting shell");
        leptos::mount_to_body(|| leptos::view! { <App/> });
    }
}
