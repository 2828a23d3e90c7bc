use super::entities::MetricSnapshot;
use super::value_objects::BadgeStyle;

/// Everything a card shows, resolved ahead of any DOM write
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub price: String,
    pub ma50: String,
    pub rsi14: String,
    pub signal: String,
    pub badge: BadgeStyle,
    /// Badge tooltip; empty clears it
    pub reasons: String,
}

impl CardContent {
    pub const UNAVAILABLE: &'static str = "n/a";
    pub const ERROR_SIGNAL: &'static str = "Error";

    pub const PRICE_DECIMALS: usize = 2;
    pub const MA_DECIMALS: usize = 2;
    pub const RSI_DECIMALS: usize = 1;

    pub fn from_snapshot(snapshot: &MetricSnapshot) -> Self {
        if snapshot.is_error() {
            return Self::unavailable();
        }

        Self {
            price: snapshot.price.format(Self::PRICE_DECIMALS),
            ma50: snapshot.ma50.format(Self::MA_DECIMALS),
            rsi14: snapshot.rsi14.format(Self::RSI_DECIMALS),
            signal: snapshot.signal.display().to_string(),
            badge: snapshot.signal.badge(),
            reasons: snapshot.reasons.join("; "),
        }
    }

    /// Upstream error for this ticker: placeholders and a hold-styled "Error"
    pub fn unavailable() -> Self {
        Self {
            price: Self::UNAVAILABLE.to_string(),
            ma50: Self::UNAVAILABLE.to_string(),
            rsi14: Self::UNAVAILABLE.to_string(),
            signal: Self::ERROR_SIGNAL.to_string(),
            badge: BadgeStyle::Hold,
            reasons: String::new(),
        }
    }
}
