use js_sys::Date;
use wasm_bindgen::JsValue;

/// Browser-locale wall-clock label, e.g. `3:04:05 PM` or `15:04:05`.
pub fn locale_time_label(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    date.to_locale_time_string("default").into()
}

/// `HH:MM:SS.mmm` in local time, used as the log line prefix.
pub fn log_time_label(timestamp: u64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
        date.get_milliseconds()
    )
}
