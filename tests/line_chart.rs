use ticker_board_wasm::domain::chart::{LineChart, LineStyle};
use ticker_board_wasm::domain::market_data::{SeriesStore, Ticker};

#[test]
fn empty_store_gives_empty_chart() {
    let chart = LineChart::from_store(&SeriesStore::default());
    assert!(chart.labels.is_empty());
    assert!(chart.datasets.is_empty());
    assert_eq!(chart.value_range(), None);
}

#[test]
fn label_axis_comes_from_first_ticker() {
    let mut store = SeriesStore::default();
    let a = Ticker::from("AAA");
    let b = Ticker::from("BBB");
    for i in 0..3 {
        store.append(&a, format!("a{}", i), 10.0 + i as f64);
    }
    for i in 0..5 {
        store.append(&b, format!("b{}", i), 20.0 + i as f64);
    }

    let chart = LineChart::from_store(&store);

    assert_eq!(chart.labels, vec!["a0", "a1", "a2"]);
    let names: Vec<&str> = chart.datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(names, vec!["AAA", "BBB"]);
    assert_eq!(chart.datasets[1].data.len(), 5);
}

#[test]
fn range_only_covers_points_on_the_axis() {
    let mut store = SeriesStore::default();
    let a = Ticker::from("AAA");
    let b = Ticker::from("BBB");
    store.append(&a, "t0".to_string(), 10.0);
    store.append(&b, "t0".to_string(), 12.0);
    store.append(&b, "t1".to_string(), 99.0);

    let chart = LineChart::from_store(&store);
    assert_eq!(chart.value_range(), Some((10.0, 12.0)));
}

#[test]
fn lines_are_thin_unfilled_and_slightly_curved() {
    let mut store = SeriesStore::default();
    store.append(&Ticker::from("NEM"), "t0".to_string(), 40.0);

    let chart = LineChart::from_store(&store);
    let style = chart.datasets[0].style;
    assert_eq!(style, LineStyle { stroke_width: 2.0, fill: false, tension: 0.2 });
    assert!(chart.options.legend);
    assert!(chart.options.x_axis && chart.options.y_axis);
}

#[test]
fn datasets_get_distinct_colours() {
    let mut store = SeriesStore::default();
    for symbol in ["A", "B", "C"] {
        store.append(&Ticker::from(symbol), "t0".to_string(), 1.0);
    }
    let chart = LineChart::from_store(&store);
    assert_ne!(chart.datasets[0].color, chart.datasets[1].color);
    assert_ne!(chart.datasets[1].color, chart.datasets[2].color);
}
