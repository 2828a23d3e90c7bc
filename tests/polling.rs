#![cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use ticker_board_wasm::application::{DashboardCoordinator, PollState, Poller};
use ticker_board_wasm::config::DashboardConfig;
use ticker_board_wasm::domain::chart::LineChart;
use ticker_board_wasm::domain::errors::{DomResult, NetworkResult, RenderingResult};
use ticker_board_wasm::domain::market_data::{CardContent, PriceBoard, PriceRepository, Ticker};
use ticker_board_wasm::infrastructure::{BrowserTimeProvider, CardBoard, ChartSurface};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const INTERVAL_MS: u32 = 400;
const FETCH_MS: u32 = 40;

/// Answers after `FETCH_MS`, counting calls
struct SlowRepository {
    calls: Rc<Cell<u32>>,
}

impl PriceRepository for SlowRepository {
    async fn fetch_board(&self) -> NetworkResult<PriceBoard> {
        self.calls.set(self.calls.get() + 1);
        TimeoutFuture::new(FETCH_MS).await;
        PriceBoard::parse(r#"{"PLTR": {"price": 25.0, "signal": "Buy"}}"#)
    }
}

#[derive(Default)]
struct StatusBoard {
    status: String,
    cards: Vec<Ticker>,
}

impl CardBoard for StatusBoard {
    fn set_tickers_label(&mut self, _label: &str) -> DomResult<()> {
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> DomResult<()> {
        self.status = text.to_string();
        Ok(())
    }

    fn ensure_card(&mut self, ticker: &Ticker) -> DomResult<bool> {
        if self.cards.contains(ticker) {
            return Ok(false);
        }
        self.cards.push(ticker.clone());
        Ok(true)
    }

    fn update_card(&mut self, _ticker: &Ticker, _content: &CardContent) -> DomResult<()> {
        Ok(())
    }
}

struct BlankSurface;

impl ChartSurface for BlankSurface {
    fn release(&mut self) {}

    fn draw(&mut self, _chart: &LineChart) -> RenderingResult<()> {
        Ok(())
    }
}

fn poller(calls: Rc<Cell<u32>>) -> Poller<SlowRepository, StatusBoard, BlankSurface> {
    let mut config = DashboardConfig::from_raw(None, Some("PLTR".to_string()));
    config.poll_interval_ms = INTERVAL_MS;
    let coordinator = DashboardCoordinator::new(
        config,
        StatusBoard::default(),
        BlankSurface,
        Box::new(BrowserTimeProvider::new()),
    );
    Poller::new(SlowRepository { calls }, coordinator)
}

#[wasm_bindgen_test]
fn interval_comes_from_config() {
    assert_eq!(poller(Rc::new(Cell::new(0))).interval_ms(), INTERVAL_MS);
}

#[wasm_bindgen_test]
async fn first_cycle_runs_before_the_first_tick() {
    let calls = Rc::new(Cell::new(0));
    let poller = poller(Rc::clone(&calls));
    let coordinator = poller.coordinator();

    let handle = poller.start();
    assert_eq!(handle.state(), PollState::Fetching);

    TimeoutFuture::new(FETCH_MS * 3).await;
    assert_eq!(handle.state(), PollState::Idle);
    assert_eq!(calls.get(), 1);
    {
        let dashboard = coordinator.borrow();
        assert_eq!(dashboard.cycles(), 1);
        assert!(dashboard.board().status.starts_with("Last update: "));
        assert_eq!(dashboard.board().cards.len(), 1);
    }

    drop(handle);
}

#[wasm_bindgen_test]
async fn interval_repeats_the_cycle() {
    let calls = Rc::new(Cell::new(0));
    let poller = poller(Rc::clone(&calls));
    let coordinator = poller.coordinator();

    let handle = poller.start();
    TimeoutFuture::new(INTERVAL_MS + FETCH_MS * 3).await;

    assert_eq!(calls.get(), 2);
    assert_eq!(coordinator.borrow().cycles(), 2);
    assert_eq!(coordinator.borrow().board().cards.len(), 1);
    assert_eq!(handle.state(), PollState::Idle);

    drop(handle);
}

#[wasm_bindgen_test]
async fn dropping_the_handle_stops_polling() {
    let calls = Rc::new(Cell::new(0));
    let poller = poller(Rc::clone(&calls));
    let coordinator = poller.coordinator();

    drop(poller.start());
    TimeoutFuture::new(INTERVAL_MS * 2).await;

    assert_eq!(calls.get(), 1);
    assert_eq!(coordinator.borrow().cycles(), 1);
}
