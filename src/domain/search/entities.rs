use serde::{Deserialize, Serialize};

/// One row of the search dropdown. Ephemeral, ordering is backend-owned and
/// preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub symbol: String,
    pub name: String,
}

impl SuggestionItem {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self { symbol: symbol.into(), name: name.into() }
    }
}

/// Quote payload as the backend reports it. Everything but the symbol is
/// optional; display code defaults missing fields to "N/A".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteRecord {
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

impl QuoteRecord {
    /// Derive day change fields from close prices when the backend sent only
    /// the raw prices.
    pub fn with_derived_change(mut self) -> Self {
        if self.day_change.is_none() {
            if let (Some(current), Some(previous)) = (self.current_price, self.previous_close) {
                self.day_change = Some(current - previous);
            }
        }
        if self.day_change_percent.is_none() {
            self.day_change_percent = crate::domain::formatting::calculate_change_percentage(
                self.current_price,
                self.previous_close,
            );
        }
        self
    }
}

/// Entry of the user's watchlist as rendered client-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub company_name: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub notes: Option<String>,
    pub current_price: Option<f64>,
}
