//! Clock-adjacent helpers: the simplified market-hours check and the
//! last-updated timestamp formatter.

use js_sys::Date;
use wasm_bindgen::JsValue;

/// Simplified US market-hours rule: Monday through Friday, local hour 9..=16.
/// No holiday calendar and no exchange timezone correction.
///
/// `weekday` follows the JS convention (0 = Sunday).
pub fn is_market_hours(weekday: u32, hour: u32) -> bool {
    matches!(weekday, 1..=5) && (9..=16).contains(&hour)
}

/// Market-hours check against the browser clock.
pub fn is_market_open() -> bool {
    let now = Date::new_0();
    is_market_hours(now.get_day(), now.get_hours())
}

/// Render a backend timestamp string for display. Anything the Date parser
/// rejects comes back as "N/A" instead of "Invalid Date".
pub fn format_last_updated(raw: &str) -> String {
    let date = Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return "N/A".to_string();
    }
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}
