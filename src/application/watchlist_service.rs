use std::rc::Rc;

use crate::application::ports::Notifier;
use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::domain::notifications::ToastKind;
use crate::domain::search::entities::{QuoteRecord, WatchlistEntry};
use crate::domain::search::repositories::StockGateway;
use crate::domain::search::value_objects::Symbol;
use crate::{log_info, log_warn};

/// Watchlist mutations and the manual data refresh, each reported through a
/// toast. Symbols are normalized locally before the round-trip; the backend
/// still revalidates.
pub struct WatchlistService {
    gateway: Rc<dyn StockGateway>,
    notifier: Rc<dyn Notifier>,
}

impl WatchlistService {
    pub fn new(gateway: Rc<dyn StockGateway>, notifier: Rc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    pub async fn add(&self, raw_symbol: &str) {
        let Some(symbol) = self.normalized(raw_symbol) else { return };
        match self.gateway.watchlist_add(symbol.value()).await {
            Ok(message) => {
                log_info!(LogComponent::Application("Watchlist"), "⭐ {message}");
                self.notifier.notify(ToastKind::Success, &message);
            }
            Err(error) => self.report(&symbol, "add", &error),
        }
    }

    pub async fn remove(&self, raw_symbol: &str) {
        let Some(symbol) = self.normalized(raw_symbol) else { return };
        match self.gateway.watchlist_remove(symbol.value()).await {
            Ok(message) => {
                log_info!(LogComponent::Application("Watchlist"), "🗑 {message}");
                self.notifier.notify(ToastKind::Success, &message);
            }
            Err(error) => self.report(&symbol, "remove", &error),
        }
    }

    /// Current entries; a failure surfaces as a toast and an empty page state
    /// is left to the caller.
    pub async fn entries(&self) -> Result<Vec<WatchlistEntry>, AppError> {
        match self.gateway.watchlist_list().await {
            Ok(entries) => Ok(entries),
            Err(error) => {
                log_warn!(LogComponent::Application("Watchlist"), "List failed: {error}");
                self.notifier.notify(ToastKind::Error, &error.user_message());
                Err(error)
            }
        }
    }

    /// Ask the backend to refetch upstream data for a symbol. Resolves to the
    /// fresh record so the caller can re-render in place.
    pub async fn refresh(&self, raw_symbol: &str) -> Option<QuoteRecord> {
        let symbol = self.normalized(raw_symbol)?;
        match self.gateway.refresh(symbol.value()).await {
            Ok(record) => {
                self.notifier
                    .notify(ToastKind::Success, &format!("{} data refreshed", symbol.value()));
                Some(record)
            }
            Err(error) => {
                self.report(&symbol, "refresh", &error);
                None
            }
        }
    }

    fn normalized(&self, raw_symbol: &str) -> Option<Symbol> {
        match Symbol::parse(raw_symbol) {
            Ok(symbol) => Some(symbol),
            Err(error) => {
                self.notifier.notify(ToastKind::Error, &error.user_message());
                None
            }
        }
    }

    fn report(&self, symbol: &Symbol, action: &str, error: &AppError) {
        log_warn!(
            LogComponent::Application("Watchlist"),
            "Failed to {action} {}: {error}",
            symbol.value()
        );
        self.notifier.notify(ToastKind::Error, &error.user_message());
    }
}
