//! Wire DTOs for the backend JSON envelopes. Every endpoint reports logical
//! failures through an `error` field next to its payload.

use serde::{Deserialize, Serialize};

use crate::domain::search::entities::{QuoteRecord, SuggestionItem, WatchlistEntry};

#[derive(Debug, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub results: Vec<SuggestionDto>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionDto {
    pub symbol: String,
    pub name: String,
}

impl SuggestionDto {
    pub fn into_domain(self) -> SuggestionItem {
        SuggestionItem { symbol: self.symbol, name: self.name }
    }
}

/// Envelope of the quote and refresh endpoints: `{ "stock": {...} }`.
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    pub stock: Option<QuoteDto>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteDto {
    pub symbol: String,
    pub company_name: Option<String>,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub open_price: Option<f64>,
    pub day_change: Option<f64>,
    pub day_change_percent: Option<f64>,
    pub day_low: Option<f64>,
    pub day_high: Option<f64>,
    pub volume: Option<u64>,
    pub market_cap: Option<f64>,
    pub formatted_market_cap: Option<String>,
    pub pe_ratio: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub last_updated: Option<String>,
}

impl QuoteDto {
    pub fn into_domain(self) -> QuoteRecord {
        QuoteRecord {
            symbol: self.symbol,
            company_name: self.company_name,
            current_price: self.current_price,
            previous_close: self.previous_close,
            open_price: self.open_price,
            day_change: self.day_change,
            day_change_percent: self.day_change_percent,
            day_low: self.day_low,
            day_high: self.day_high,
            volume: self.volume,
            market_cap: self.market_cap,
            formatted_market_cap: self.formatted_market_cap,
            pe_ratio: self.pe_ratio,
            fifty_two_week_high: self.fifty_two_week_high,
            fifty_two_week_low: self.fifty_two_week_low,
            last_updated: self.last_updated,
        }
        .with_derived_change()
    }
}

/// Envelope of the watchlist add/remove endpoints.
#[derive(Debug, Deserialize)]
pub struct ActionResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchlistResponse {
    #[serde(default)]
    pub watchlist: Vec<WatchlistItemDto>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchlistItemDto {
    pub symbol: String,
    pub company_name: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub notes: Option<String>,
    pub current_price: Option<f64>,
}

impl WatchlistItemDto {
    pub fn into_domain(self) -> WatchlistEntry {
        WatchlistEntry {
            symbol: self.symbol,
            company_name: self.company_name,
            is_favorite: self.is_favorite,
            notes: self.notes,
            current_price: self.current_price,
        }
    }
}

/// Body of the watchlist add/remove POST requests.
#[derive(Debug, Serialize)]
pub struct SymbolPayload {
    pub symbol: String,
}
