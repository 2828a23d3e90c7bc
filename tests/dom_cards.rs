#![cfg(target_arch = "wasm32")]
use ticker_board_wasm::domain::market_data::{BadgeStyle, CardContent, Ticker};
use ticker_board_wasm::infrastructure::{CardBoard, DomCardBoard, HostElementIds};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn host(prefix: &str) -> HostElementIds {
    let document = web_sys::window().unwrap().document().unwrap();
    let ids = HostElementIds {
        cards: format!("{}-cards", prefix),
        status: format!("{}-status", prefix),
        tickers_label: format!("{}-label", prefix),
        chart_canvas: format!("{}-chart", prefix),
    };
    for id in [&ids.cards, &ids.status, &ids.tickers_label] {
        let element = document.create_element("div").unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
    }
    ids
}

#[wasm_bindgen_test]
fn ensure_card_is_idempotent() {
    let ids = host("idem");
    let mut board = DomCardBoard::new(ids.clone()).unwrap();
    let ticker = Ticker::from("DOMIDEM");

    assert!(board.ensure_card(&ticker).unwrap());
    assert!(!board.ensure_card(&ticker).unwrap());

    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.get_element_by_id(&ids.cards).unwrap();
    assert_eq!(container.child_element_count(), 1);
    assert!(document.get_element_by_id("card-DOMIDEM").is_some());
}

#[wasm_bindgen_test]
fn update_card_writes_every_slot() {
    let ids = host("update");
    let mut board = DomCardBoard::new(ids).unwrap();
    let ticker = Ticker::from("DOMUPD");
    board.ensure_card(&ticker).unwrap();

    let content = CardContent {
        price: "10.01".to_string(),
        ma50: "9.50".to_string(),
        rsi14: "45.3".to_string(),
        signal: "Sell".to_string(),
        badge: BadgeStyle::Sell,
        reasons: "RSI overbought-ish".to_string(),
    };
    board.update_card(&ticker, &content).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let text = |id: &str| document.get_element_by_id(id).unwrap().text_content().unwrap();
    assert_eq!(text("price-DOMUPD"), "10.01");
    assert_eq!(text("ma50-DOMUPD"), "9.50");
    assert_eq!(text("rsi-DOMUPD"), "45.3");
    assert_eq!(text("signal-DOMUPD"), "Sell");

    let signal = document.get_element_by_id("signal-DOMUPD").unwrap();
    assert_eq!(signal.class_name(), "badge sell");
    assert_eq!(signal.get_attribute("title").as_deref(), Some("RSI overbought-ish"));
}

#[wasm_bindgen_test]
fn update_without_card_fails_untouched() {
    let ids = host("missing");
    let mut board = DomCardBoard::new(ids).unwrap();
    assert!(board.update_card(&Ticker::from("NOCARD"), &CardContent::unavailable()).is_err());
}

#[wasm_bindgen_test]
fn status_and_label_are_written() {
    let ids = host("status");
    let mut board = DomCardBoard::new(ids.clone()).unwrap();
    board.set_tickers_label("PLTR, NVDA").unwrap();
    board.set_status("Last update: 10:00:00").unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    assert_eq!(document.get_element_by_id(&ids.status).unwrap().text_content().unwrap(), "Last update: 10:00:00");
    assert_eq!(document.get_element_by_id(&ids.tickers_label).unwrap().text_content().unwrap(), "PLTR, NVDA");
}
