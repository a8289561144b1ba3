use futures::future::LocalBoxFuture;

use crate::domain::errors::AppError;
use crate::domain::search::entities::{QuoteRecord, SuggestionItem, WatchlistEntry};

/// Interface to the backend HTTP API.
///
/// Boxed local futures keep the trait object-safe so services can hold an
/// `Rc<dyn StockGateway>` and tests can inject stubs.
pub trait StockGateway {
    /// Symbol suggestions for a partial query, in backend order.
    fn suggestions<'a>(
        &'a self,
        query: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<SuggestionItem>, AppError>>;

    /// Fresh quote for the quick-quote modal.
    fn quote<'a>(&'a self, symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>>;

    /// Force the backend to refetch upstream data for a symbol.
    fn refresh<'a>(&'a self, symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>>;

    /// Add a symbol to the watchlist; resolves to the backend's message.
    fn watchlist_add<'a>(&'a self, symbol: &'a str) -> LocalBoxFuture<'a, Result<String, AppError>>;

    /// Remove a symbol from the watchlist; resolves to the backend's message.
    fn watchlist_remove<'a>(
        &'a self,
        symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>>;

    /// Current watchlist contents.
    fn watchlist_list(&self) -> LocalBoxFuture<'_, Result<Vec<WatchlistEntry>, AppError>>;
}
