pub mod ports;
pub mod quote_service;
pub mod search_service;
pub mod watchlist_service;

pub use ports::{Notifier, QuoteModalView, SearchView};
pub use quote_service::QuoteService;
pub use search_service::SearchService;
pub use watchlist_service::WatchlistService;
