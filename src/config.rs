use crate::domain::market_data::{SeriesStore, Ticker};

pub const DEFAULT_TICKERS: &str = "PLTR,NVDA,NEM";
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Page-level configuration, read once at startup and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL without a trailing slash; empty means same origin
    pub api_url: String,
    pub tickers: Vec<Ticker>,
    pub poll_interval_ms: u32,
    pub series_capacity: usize,
}

impl DashboardConfig {
    /// Absent or blank values fall back to defaults; there is no error case.
    pub fn from_raw(api_url: Option<String>, tickers: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_default().trim().trim_end_matches('/').to_string();

        let raw_tickers = tickers
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TICKERS.to_string());
        let mut tickers: Vec<Ticker> = raw_tickers
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Ticker::from)
            .collect();
        if tickers.is_empty() {
            tickers = DEFAULT_TICKERS.split(',').map(Ticker::from).collect();
        }

        Self {
            api_url,
            tickers,
            poll_interval_ms: POLL_INTERVAL_MS,
            series_capacity: SeriesStore::DEFAULT_CAPACITY,
        }
    }

    /// Reads `window.API_URL` and `window.TICKERS`; non-string globals count as absent.
    pub fn from_page_globals() -> Self {
        Self::from_raw(read_global("API_URL"), read_global("TICKERS"))
    }

    pub fn prices_url(&self) -> String {
        format!("{}/prices", self.api_url)
    }

    pub fn tickers_label(&self) -> String {
        self.tickers.iter().map(Ticker::value).collect::<Vec<_>>().join(", ")
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

fn read_global(key: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &wasm_bindgen::JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}
