use crate::config::DashboardConfig;
use crate::domain::{
    chart::LineChart,
    errors::{AppError, NetworkResult, RenderingResult},
    logging::{LogComponent, TimeProvider},
    market_data::{CardContent, PriceBoard, SeriesStore},
};
use crate::infrastructure::{CardBoard, ChartSurface};
use crate::{log_debug, log_error, log_warn};

/// Status line text after a failed cycle
pub const STATUS_ERROR: &str = "Error fetching data. Check API_URL in config.js";

/// What one refresh cycle did
#[derive(Debug, Clone, PartialEq)]
pub enum CycleReport {
    /// Cards refreshed for every configured ticker; `appended` prices went to the series store
    Updated { cards: usize, appended: usize },
    Failed(AppError),
}

impl CycleReport {
    pub fn is_success(&self) -> bool {
        matches!(self, CycleReport::Updated { .. })
    }
}

/// Owns all dashboard state; a cycle is `apply_cycle(fetch outcome)`.
///
/// The card board and chart surface are injected so the cycle can run
/// against the live page or against in-memory doubles.
pub struct DashboardCoordinator<V: CardBoard, S: ChartSurface> {
    config: DashboardConfig,
    series: SeriesStore,
    board: V,
    surface: S,
    chart: Option<LineChart>,
    clock: Box<dyn TimeProvider>,
    cycles: u64,
}

impl<V: CardBoard, S: ChartSurface> DashboardCoordinator<V, S> {
    pub fn new(config: DashboardConfig, mut board: V, surface: S, clock: Box<dyn TimeProvider>) -> Self {
        if let Err(e) = board.set_tickers_label(&config.tickers_label()) {
            log_warn!(LogComponent::Coordinator, "Ticker label not written: {}", e);
        }

        Self {
            series: SeriesStore::new(config.series_capacity),
            config,
            board,
            surface,
            chart: None,
            clock,
            cycles: 0,
        }
    }

    /// Synchronous half of a cycle. Never fails outward: any error becomes
    /// the status message and a `Failed` report.
    pub fn apply_cycle(&mut self, outcome: NetworkResult<PriceBoard>) -> CycleReport {
        self.cycles += 1;

        match outcome.and_then(|prices| self.render_prices(&prices)) {
            Ok((cards, appended)) => {
                log_debug!(
                    LogComponent::Coordinator,
                    "Cycle {} updated {} cards, {} new points",
                    self.cycles,
                    cards,
                    appended
                );
                CycleReport::Updated { cards, appended }
            }
            Err(e) => {
                self.report_failure(&e);
                CycleReport::Failed(e)
            }
        }
    }

    fn render_prices(&mut self, prices: &PriceBoard) -> Result<(usize, usize), AppError> {
        // One label per cycle keeps every ticker on the same axis slot
        let label = self.clock.now_label();
        self.board.set_status(&format!("Last update: {}", label))?;

        let mut appended = 0;
        for ticker in &self.config.tickers {
            self.board.ensure_card(ticker)?;

            let snapshot = prices.snapshot_for(ticker);
            if let Some(reason) = &snapshot.error {
                log_warn!(
                    LogComponent::Coordinator,
                    "{} reported an error: {}",
                    ticker,
                    reason
                );
            }
            self.board.update_card(ticker, &CardContent::from_snapshot(&snapshot))?;

            if let Some(price) = snapshot.chart_price() {
                self.series.append(ticker, label.clone(), price);
                appended += 1;
            }
        }

        self.rebuild_chart()?;
        Ok((self.config.tickers.len(), appended))
    }

    /// Drops the previous chart and draws a fresh one from the series store
    fn rebuild_chart(&mut self) -> RenderingResult<()> {
        if self.chart.take().is_some() {
            self.surface.release();
        }
        let chart = LineChart::from_store(&self.series);
        self.surface.draw(&chart)?;
        self.chart = Some(chart);
        Ok(())
    }

    fn report_failure(&mut self, error: &AppError) {
        log_error!(LogComponent::Coordinator, "Refresh cycle {} failed: {}", self.cycles, error);
        if let Err(e) = self.board.set_status(STATUS_ERROR) {
            log_error!(LogComponent::Coordinator, "Status line not updated: {}", e);
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn series(&self) -> &SeriesStore {
        &self.series
    }

    pub fn chart(&self) -> Option<&LineChart> {
        self.chart.as_ref()
    }

    pub fn board(&self) -> &V {
        &self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
