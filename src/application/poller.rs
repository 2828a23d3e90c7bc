use super::coordinator::{CycleReport, DashboardCoordinator};
use crate::domain::{logging::LogComponent, market_data::PriceRepository};
use crate::infrastructure::{CardBoard, ChartSurface};
use crate::log_warn;
use gloo_timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Idle between cycles, Fetching while a request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
}

/// One full refresh cycle. The coordinator is only borrowed once the fetch
/// has resolved, so overlapping cycles interleave whole updates.
pub async fn refresh<R, V, S>(repository: &R, coordinator: &RefCell<DashboardCoordinator<V, S>>) -> CycleReport
where
    R: PriceRepository,
    V: CardBoard,
    S: ChartSurface,
{
    let outcome = repository.fetch_board().await;
    coordinator.borrow_mut().apply_cycle(outcome)
}

/// Drives the coordinator: one cycle at start, then one per interval tick
pub struct Poller<R, V: CardBoard, S: ChartSurface> {
    repository: Rc<R>,
    coordinator: Rc<RefCell<DashboardCoordinator<V, S>>>,
    interval_ms: u32,
    in_flight: Rc<Cell<u32>>,
}

impl<R, V, S> Poller<R, V, S>
where
    R: PriceRepository + 'static,
    V: CardBoard + 'static,
    S: ChartSurface + 'static,
{
    pub fn new(repository: R, coordinator: DashboardCoordinator<V, S>) -> Self {
        let interval_ms = coordinator.config().poll_interval_ms;
        Self {
            repository: Rc::new(repository),
            coordinator: Rc::new(RefCell::new(coordinator)),
            interval_ms,
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn coordinator(&self) -> Rc<RefCell<DashboardCoordinator<V, S>>> {
        Rc::clone(&self.coordinator)
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Fires an immediate cycle and schedules the fixed-rate timer.
    /// Dropping the returned handle stops the timer.
    pub fn start(self) -> PollingHandle {
        self.spawn_cycle();

        let in_flight = Rc::clone(&self.in_flight);
        let interval_ms = self.interval_ms;
        let interval = Interval::new(interval_ms, move || self.spawn_cycle());

        PollingHandle { _interval: interval, in_flight }
    }

    fn spawn_cycle(&self) {
        if self.in_flight.get() > 0 {
            log_warn!(
                LogComponent::Poller,
                "Previous cycle still in flight ({} pending)",
                self.in_flight.get()
            );
        }
        self.in_flight.set(self.in_flight.get() + 1);

        let repository = Rc::clone(&self.repository);
        let coordinator = Rc::clone(&self.coordinator);
        let in_flight = Rc::clone(&self.in_flight);
        wasm_bindgen_futures::spawn_local(async move {
            refresh(repository.as_ref(), &coordinator).await;
            in_flight.set(in_flight.get().saturating_sub(1));
        });
    }
}

/// Keeps the interval alive
pub struct PollingHandle {
    _interval: Interval,
    in_flight: Rc<Cell<u32>>,
}

impl PollingHandle {
    pub fn state(&self) -> PollState {
        if self.in_flight.get() > 0 { PollState::Fetching } else { PollState::Idle }
    }

    /// Leaves the timer running for the rest of the page session
    pub fn detach(self) {
        let _ = self._interval.forget();
    }
}
