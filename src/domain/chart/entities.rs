use super::value_objects::{series_color, ChartOptions, LineStyle};
use crate::domain::market_data::SeriesStore;
use serde::Serialize;

/// One line of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub color: &'static str,
    pub style: LineStyle,
}

/// Domain entity - the multi-series line chart, rebuilt from scratch each cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl LineChart {
    /// One dataset per ticker in store order. The shared label axis comes from
    /// the first ticker only; the others are assumed to share its cadence.
    pub fn from_store(store: &SeriesStore) -> Self {
        let datasets = store
            .iter()
            .enumerate()
            .map(|(index, (ticker, series))| Dataset {
                label: ticker.value().to_string(),
                data: series.prices(),
                color: series_color(index),
                style: LineStyle::default(),
            })
            .collect();

        let labels = store
            .iter()
            .next()
            .map(|(_, series)| series.labels())
            .unwrap_or_default();

        Self { labels, datasets, options: ChartOptions::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Min and max over every plotted value, `None` if nothing is plotted
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let visible = self.labels.len();
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().take(visible))
            .filter(|v| v.is_finite())
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
