//! Display model for the quick-quote modal.

use crate::domain::formatting::{
    change_direction, format_currency, format_large_number, format_market_cap, format_percentage,
};
use crate::domain::search::entities::QuoteRecord;

/// Lifecycle of the quick-quote modal. Loading shows immediately so the modal
/// never opens blank; failure renders inline in the modal body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuoteModalState {
    #[default]
    Closed,
    Loading(String),
    Ready(QuoteViewModel),
    Failed {
        symbol: String,
        message: String,
    },
}

/// Everything the modal body renders, pre-formatted. Missing backend fields
/// arrive here already defaulted to "N/A".
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteViewModel {
    pub symbol: String,
    pub company_name: String,
    pub price: String,
    pub change_text: String,
    pub change_class: &'static str,
    pub previous_close: String,
    pub market_cap: String,
    pub day_range: String,
    pub volume: String,
    pub last_updated: String,
}

impl QuoteViewModel {
    pub fn from_record(record: &QuoteRecord) -> Self {
        let record = record.clone().with_derived_change();
        let direction = change_direction(record.day_change);

        let change_text = match (record.day_change, record.day_change_percent) {
            (Some(change), Some(percent)) => format!(
                "{} {} ({})",
                direction.glyph(),
                format_currency(Some(change.abs())),
                format_percentage(Some(percent), 2)
            )
            .trim_start()
            .to_string(),
            _ => "N/A".to_string(),
        };

        let day_range = match (record.day_low, record.day_high) {
            (Some(low), Some(high)) => {
                format!("{} - {}", format_currency(Some(low)), format_currency(Some(high)))
            }
            _ => "N/A".to_string(),
        };

        let market_cap = record
            .formatted_market_cap
            .clone()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format_market_cap(record.market_cap));

        Self {
            symbol: record.symbol.clone(),
            company_name: record.company_name.clone().unwrap_or_else(|| record.symbol.clone()),
            price: format_currency(record.current_price),
            change_text,
            change_class: direction.css_class(),
            previous_close: format_currency(record.previous_close),
            market_cap,
            day_range,
            volume: format_large_number(record.volume.map(|v| v as f64)),
            last_updated: record.last_updated.clone().unwrap_or_else(|| "N/A".to_string()),
        }
    }
}
