//! DOM side of the dashboard: the ticker label, status line and per-ticker cards.

use crate::domain::{
    errors::{AppError, DomResult},
    logging::{LogComponent, get_logger},
    market_data::{BadgeStyle, CardContent, Ticker},
};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Host page element ids the dashboard writes into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostElementIds {
    pub cards: String,
    pub status: String,
    pub tickers_label: String,
    pub chart_canvas: String,
}

impl Default for HostElementIds {
    fn default() -> Self {
        Self {
            cards: "cards".to_string(),
            status: "status".to_string(),
            tickers_label: "tickersLabel".to_string(),
            chart_canvas: "priceChart".to_string(),
        }
    }
}

/// Value slots inside a card; ids are `{slot}-{ticker}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum CardSlot {
    #[strum(serialize = "price")]
    Price,
    #[strum(serialize = "ma50")]
    Ma50,
    #[strum(serialize = "rsi")]
    Rsi14,
    #[strum(serialize = "signal")]
    Signal,
}

impl CardSlot {
    pub fn caption(&self) -> &'static str {
        match self {
            CardSlot::Price => "Price",
            CardSlot::Ma50 => "MA(50)",
            CardSlot::Rsi14 => "RSI(14)",
            CardSlot::Signal => "Signal",
        }
    }

    pub fn element_id(&self, ticker: &Ticker) -> String {
        format!("{}-{}", self.as_ref(), ticker.value())
    }
}

pub fn card_element_id(ticker: &Ticker) -> String {
    format!("card-{}", ticker.value())
}

/// The dashboard's writable surface, minus the chart
pub trait CardBoard {
    fn set_tickers_label(&mut self, label: &str) -> DomResult<()>;
    fn set_status(&mut self, text: &str) -> DomResult<()>;
    /// Creates the card if absent; returns whether one was created.
    fn ensure_card(&mut self, ticker: &Ticker) -> DomResult<bool>;
    fn update_card(&mut self, ticker: &Ticker, content: &CardContent) -> DomResult<()>;
}

/// `CardBoard` over the live document
pub struct DomCardBoard {
    document: Document,
    ids: HostElementIds,
}

impl DomCardBoard {
    pub fn new(ids: HostElementIds) -> DomResult<Self> {
        let document = web_sys::window()
            .ok_or_else(|| AppError::Dom("Window not available".to_string()))?
            .document()
            .ok_or_else(|| AppError::Dom("Document not available".to_string()))?;
        Ok(Self { document, ids })
    }

    fn element(&self, id: &str) -> DomResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::Dom(format!("Element '{}' not found", id)))
    }

    fn create(&self, tag: &str) -> DomResult<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| js_error(&format!("create <{}>", tag), e))
    }

    fn build_card(&self, ticker: &Ticker) -> DomResult<Element> {
        let card = self.create("div")?;
        card.set_class_name("card");
        card.set_id(&card_element_id(ticker));

        let heading = self.create("h3")?;
        heading.set_text_content(Some(ticker.value()));
        append(&card, &heading)?;

        for slot in CardSlot::iter() {
            let row = self.create("div")?;
            row.set_class_name("kv");

            let caption = self.create("span")?;
            caption.set_text_content(Some(slot.caption()));
            append(&row, &caption)?;

            let value = self.create(if slot == CardSlot::Price { "strong" } else { "span" })?;
            value.set_id(&slot.element_id(ticker));
            if slot == CardSlot::Signal {
                value.set_class_name(BadgeStyle::Hold.class_name());
                value.set_text_content(Some("Hold"));
            } else {
                value.set_text_content(Some("-"));
            }
            append(&row, &value)?;

            append(&card, &row)?;
        }

        Ok(card)
    }
}

impl CardBoard for DomCardBoard {
    fn set_tickers_label(&mut self, label: &str) -> DomResult<()> {
        match self.document.get_element_by_id(&self.ids.tickers_label) {
            Some(element) => element.set_text_content(Some(label)),
            None => get_logger().warn(
                LogComponent::Cards,
                &format!("Ticker label element '{}' not found", self.ids.tickers_label),
            ),
        }
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> DomResult<()> {
        self.element(&self.ids.status)?.set_text_content(Some(text));
        Ok(())
    }

    fn ensure_card(&mut self, ticker: &Ticker) -> DomResult<bool> {
        if self.document.get_element_by_id(&card_element_id(ticker)).is_some() {
            return Ok(false);
        }

        let container = self.element(&self.ids.cards)?;
        let card = self.build_card(ticker)?;
        append(&container, &card)?;
        Ok(true)
    }

    fn update_card(&mut self, ticker: &Ticker, content: &CardContent) -> DomResult<()> {
        // Resolve every slot first so a card is never left half-written
        let price = self.element(&CardSlot::Price.element_id(ticker))?;
        let ma50 = self.element(&CardSlot::Ma50.element_id(ticker))?;
        let rsi = self.element(&CardSlot::Rsi14.element_id(ticker))?;
        let signal = self.element(&CardSlot::Signal.element_id(ticker))?;

        price.set_text_content(Some(&content.price));
        ma50.set_text_content(Some(&content.ma50));
        rsi.set_text_content(Some(&content.rsi14));
        signal.set_text_content(Some(&content.signal));
        signal.set_class_name(content.badge.class_name());

        let tooltip = if content.reasons.is_empty() {
            signal.remove_attribute("title")
        } else {
            signal.set_attribute("title", &content.reasons)
        };
        tooltip.map_err(|e| js_error("signal tooltip", e))
    }
}

fn append(parent: &Element, child: &Element) -> DomResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| js_error("append child", e))
}

fn js_error(context: &str, error: JsValue) -> AppError {
    AppError::Dom(format!("Failed to {}: {:?}", context, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_follow_host_convention() {
        let ticker = Ticker::from("NVDA");
        assert_eq!(card_element_id(&ticker), "card-NVDA");
        assert_eq!(CardSlot::Price.element_id(&ticker), "price-NVDA");
        assert_eq!(CardSlot::Ma50.element_id(&ticker), "ma50-NVDA");
        assert_eq!(CardSlot::Rsi14.element_id(&ticker), "rsi-NVDA");
        assert_eq!(CardSlot::Signal.element_id(&ticker), "signal-NVDA");
    }
}
