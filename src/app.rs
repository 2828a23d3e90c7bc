use leptos::*;

use crate::infrastructure::HostElementIds;

const SHELL_CSS: &str = r#"
.ticker-board {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    max-width: 960px;
    margin: 0 auto;
    padding: 20px;
    color: #222;
}

.header {
    margin-bottom: 16px;
}

.status {
    color: #666;
    font-size: 13px;
}

.cards {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 12px;
    margin-bottom: 20px;
}

.card {
    border: 1px solid #e2e2e2;
    border-radius: 10px;
    padding: 12px 14px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
}

.card h3 {
    margin: 0 0 8px;
}

.kv {
    display: flex;
    justify-content: space-between;
    margin: 4px 0;
}

.badge {
    padding: 2px 8px;
    border-radius: 999px;
    font-size: 12px;
    font-weight: 600;
}

.badge.buy { background: #d9f7e3; color: #137333; }
.badge.sell { background: #fde2e1; color: #b3261e; }
.badge.hold { background: #eeeeee; color: #555; }

.chart-container canvas {
    width: 100%;
}
"#;

/// Page skeleton carrying the element ids the dashboard writes into.
/// Only mounted when the host page brings no markup of its own.
#[component]
pub fn App() -> impl IntoView {
    let ids = HostElementIds::default();

    view! {
        <style>{SHELL_CSS}</style>
        <div class="ticker-board">
            <div class="header">
                <h1>"Ticker Board"</h1>
                <p>"Tickers: " <span id=ids.tickers_label></span></p>
                <div id=ids.status class="status">"Loading..."</div>
            </div>
            <div id=ids.cards class="cards"></div>
            <div class="chart-container">
                <canvas id=ids.chart_canvas width="900" height="360"></canvas>
            </div>
        </div>
    }
}
