pub mod controller;
pub mod entities;
pub mod quote;
pub mod repositories;
pub mod value_objects;

pub use controller::{DEBOUNCE_MS, FetchPlan, Navigation, RequestToken, SearchController, SearchKey};
pub use entities::{QuoteRecord, SuggestionItem, WatchlistEntry};
pub use quote::{QuoteModalState, QuoteViewModel};
pub use repositories::StockGateway;
pub use value_objects::Symbol;
