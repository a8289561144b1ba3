use std::rc::Rc;

use crate::application::ports::QuoteModalView;
use crate::domain::logging::LogComponent;
use crate::domain::search::quote::QuoteViewModel;
use crate::domain::search::repositories::StockGateway;
use crate::{log_error, log_info};

/// Quick-quote modal flow: loading placeholder first, then one fetch, then
/// either the formatted quote block or an inline error. No caching, no retry.
pub struct QuoteService {
    gateway: Rc<dyn StockGateway>,
    view: Rc<dyn QuoteModalView>,
}

impl QuoteService {
    pub fn new(gateway: Rc<dyn StockGateway>, view: Rc<dyn QuoteModalView>) -> Self {
        Self { gateway, view }
    }

    pub async fn open(&self, symbol: &str) {
        self.view.show_loading(symbol);

        match self.gateway.quote(symbol).await {
            Ok(record) => {
                log_info!(LogComponent::Application("Quote"), "💹 Quote loaded for {symbol}");
                self.view.show_quote(QuoteViewModel::from_record(&record));
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("Quote"),
                    "Quote for {symbol} failed: {error}"
                );
                self.view.show_error(symbol, &error.user_message());
            }
        }
    }
}
