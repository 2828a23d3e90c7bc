use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display as StrumDisplay, IntoStaticStr};

/// Value Object - ticker symbol, kept verbatim (the response is keyed by it)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One numeric field of a metric snapshot.
///
/// Anything that is not a JSON number is still displayable, so the renderer
/// never needs an existence check.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Metric {
    Number(f64),
    /// Non-numeric JSON, displayed as its raw text
    Verbatim(String),
    #[default]
    Missing,
}

impl Metric {
    pub const PLACEHOLDER: &'static str = "-";

    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Metric::Missing,
            Value::Number(n) => n.as_f64().map(Metric::Number).unwrap_or(Metric::Missing),
            Value::String(s) => Metric::Verbatim(s.clone()),
            other => Metric::Verbatim(other.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Metric::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Fixed-point rendering of the exact binary value, ties to even.
    pub fn format(&self, decimals: usize) -> String {
        match self {
            Metric::Number(n) if n.is_finite() => format!("{:.*}", decimals, n),
            Metric::Number(_) | Metric::Missing => Self::PLACEHOLDER.to_string(),
            Metric::Verbatim(text) => text.clone(),
        }
    }
}

/// Badge styling derived from the signal text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, IntoStaticStr)]
pub enum BadgeStyle {
    #[strum(serialize = "badge buy")]
    Buy,
    #[strum(serialize = "badge sell")]
    Sell,
    #[strum(serialize = "badge hold")]
    Hold,
}

impl BadgeStyle {
    /// Total, case-insensitive classification. Anything unrecognized is Hold.
    pub fn classify(signal: Option<&str>) -> Self {
        match signal {
            Some(s) if s.eq_ignore_ascii_case("buy") => BadgeStyle::Buy,
            Some(s) if s.eq_ignore_ascii_case("sell") => BadgeStyle::Sell,
            _ => BadgeStyle::Hold,
        }
    }

    pub fn class_name(self) -> &'static str {
        self.into()
    }
}

/// Signal text as sent upstream; `None` displays as "Hold"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignalText(Option<String>);

impl SignalText {
    pub const DEFAULT: &'static str = "Hold";

    pub fn new(text: Option<String>) -> Self {
        Self(text.filter(|t| !t.is_empty()))
    }

    /// Falsy values (null, false, 0, "") fall back to "Hold", like `error` does
    pub fn from_json(value: &Value) -> Self {
        match value {
            _ if !is_truthy(value) => Self(None),
            Value::String(s) => Self::new(Some(s.clone())),
            other => Self(Some(other.to_string())),
        }
    }

    pub fn display(&self) -> &str {
        self.0.as_deref().unwrap_or(Self::DEFAULT)
    }

    pub fn badge(&self) -> BadgeStyle {
        BadgeStyle::classify(self.0.as_deref())
    }
}

/// JavaScript truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
