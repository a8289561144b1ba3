//! JS-facing entry points. Server-rendered pages call these from inline
//! handlers (quick-quote buttons, watchlist toggles), so the mounted service
//! bundle is stashed per-thread at mount time.

use once_cell::unsync::OnceCell;
use wasm_bindgen::prelude::*;

use crate::app::{App, Services};
use crate::domain::logging::{LogComponent, get_logger};

thread_local! {
    static SERVICES: OnceCell<Services> = const { OnceCell::new() };
}

pub(crate) fn register_services(services: &Services) {
    SERVICES.with(|cell| {
        let _ = cell.set(services.clone());
    });
}

fn services() -> Option<Services> {
    let found = SERVICES.with(|cell| cell.get().cloned());
    if found.is_none() {
        get_logger().warn(
            LogComponent::Presentation("Api"),
            "⚠️ API called before the app was mounted",
        );
    }
    found
}

/// Mount the search widget, quote modal and toast host onto the page body.
#[wasm_bindgen(js_name = mountStockApp)]
pub fn mount_stock_app() {
    leptos::mount_to_body(App);
    get_logger().info(LogComponent::Presentation("Mount"), "✅ Stock app mounted");
}

/// Open the quick-quote modal for a symbol.
#[wasm_bindgen(js_name = openQuickQuote)]
pub fn open_quick_quote(symbol: String) {
    if let Some(services) = services() {
        services.open_quote(&symbol);
    }
}

#[wasm_bindgen(js_name = addToWatchlist)]
pub fn add_to_watchlist(symbol: String) {
    if let Some(services) = services() {
        services.add_to_watchlist(&symbol);
    }
}

#[wasm_bindgen(js_name = removeFromWatchlist)]
pub fn remove_from_watchlist(symbol: String) {
    if let Some(services) = services() {
        services.remove_from_watchlist(&symbol);
    }
}

/// Trigger a backend refresh for a symbol, then reload the page on success.
#[wasm_bindgen(js_name = refreshStockData)]
pub fn refresh_stock_data(symbol: String) {
    if let Some(services) = services() {
        services.refresh_stock(&symbol);
    }
}

/// Simplified market-hours check against the browser clock.
#[wasm_bindgen(js_name = isMarketOpen)]
pub fn market_open() -> bool {
    crate::time_utils::is_market_open()
}
