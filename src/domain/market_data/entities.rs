pub use super::value_objects::{Metric, SignalText, Ticker};
use super::value_objects::is_truthy;
use crate::domain::errors::{AppError, NetworkResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::VecDeque;

/// Wire shape of one ticker's entry; every field is optional and loosely typed
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSnapshot {
    price: Value,
    ma50: Value,
    rsi14: Value,
    signal: Value,
    error: Value,
    reasons: Value,
}

/// Domain entity - one ticker's metrics for a single refresh cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricSnapshot {
    pub price: Metric,
    pub ma50: Metric,
    pub rsi14: Metric,
    pub signal: SignalText,
    /// Upstream error text; any truthy `error` value marks the whole entry
    pub error: Option<String>,
    pub reasons: Vec<String>,
}

impl MetricSnapshot {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value::<RawSnapshot>(value.clone())
                .map(Self::from)
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Price to append to the rolling series, if this entry contributes one
    pub fn chart_price(&self) -> Option<f64> {
        if self.is_error() {
            return None;
        }
        self.price.as_number().filter(|p| p.is_finite())
    }
}

impl From<RawSnapshot> for MetricSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        let error = is_truthy(&raw.error).then(|| match &raw.error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        let reasons = match &raw.reasons {
            Value::Array(items) => items
                .iter()
                .filter_map(|r| r.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        Self {
            price: Metric::from_json(&raw.price),
            ma50: Metric::from_json(&raw.ma50),
            rsi14: Metric::from_json(&raw.rsi14),
            signal: SignalText::from_json(&raw.signal),
            error,
            reasons,
        }
    }
}

/// Domain entity - the whole `/prices` response, keyed by ticker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBoard {
    entries: Map<String, Value>,
}

impl PriceBoard {
    pub fn from_json(value: Value) -> NetworkResult<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(AppError::Parse(format!(
                "Response is not an object (got {})",
                json_kind(&other)
            ))),
        }
    }

    pub fn parse(body: &str) -> NetworkResult<Self> {
        Self::from_json(serde_json::from_str(body)?)
    }

    /// Missing tickers are an empty snapshot, not an error
    pub fn snapshot_for(&self, ticker: &Ticker) -> MetricSnapshot {
        self.entries
            .get(ticker.value())
            .map(MetricSnapshot::from_json)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One chart point: time label and price
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub price: f64,
}

/// Domain entity - bounded FIFO window of recent prices
#[derive(Debug, Clone)]
pub struct RollingSeries {
    points: VecDeque<SeriesPoint>,
    max_size: usize,
}

impl RollingSeries {
    pub fn new(max_size: usize) -> Self {
        Self { points: VecDeque::with_capacity(max_size + 1), max_size }
    }

    pub fn push(&mut self, label: String, price: f64) {
        self.points.push_back(SeriesPoint { label, price });

        // One append can overflow by at most one
        if self.points.len() > self.max_size {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }
}

/// Rolling series per ticker, iterated in first-append order
#[derive(Debug, Clone)]
pub struct SeriesStore {
    series: Vec<(Ticker, RollingSeries)>,
    capacity: usize,
}

impl SeriesStore {
    pub const DEFAULT_CAPACITY: usize = 60;

    pub fn new(capacity: usize) -> Self {
        Self { series: Vec::new(), capacity }
    }

    pub fn append(&mut self, ticker: &Ticker, label: String, price: f64) {
        let capacity = self.capacity;
        let index = match self.series.iter().position(|(t, _)| t == ticker) {
            Some(index) => index,
            None => {
                self.series.push((ticker.clone(), RollingSeries::new(capacity)));
                self.series.len() - 1
            }
        };
        self.series[index].1.push(label, price);
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&RollingSeries> {
        self.series.iter().find(|(t, _)| t == ticker).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, &RollingSeries)> {
        self.series.iter().map(|(t, s)| (t, s))
    }

    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.series.iter().map(|(t, _)| t)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
