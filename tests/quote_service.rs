use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use stock_search_wasm::application::ports::QuoteModalView;
use stock_search_wasm::application::quote_service::QuoteService;
use stock_search_wasm::domain::errors::AppError;
use stock_search_wasm::domain::search::{
    QuoteRecord, QuoteViewModel, StockGateway, SuggestionItem, WatchlistEntry,
};

#[derive(Debug, Clone, PartialEq)]
enum ModalEvent {
    Loading(String),
    Ready(QuoteViewModel),
    Failed(String, String),
}

#[derive(Default)]
struct RecordingModalView {
    events: RefCell<Vec<ModalEvent>>,
}

impl QuoteModalView for RecordingModalView {
    fn show_loading(&self, symbol: &str) {
        self.events.borrow_mut().push(ModalEvent::Loading(symbol.to_string()));
    }

    fn show_quote(&self, quote: QuoteViewModel) {
        self.events.borrow_mut().push(ModalEvent::Ready(quote));
    }

    fn show_error(&self, symbol: &str, message: &str) {
        self.events.borrow_mut().push(ModalEvent::Failed(symbol.to_string(), message.to_string()));
    }
}

struct StubGateway {
    quote: RefCell<Option<Result<QuoteRecord, AppError>>>,
}

impl StockGateway for StubGateway {
    fn suggestions<'a>(
        &'a self,
        _query: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<SuggestionItem>, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }

    fn quote<'a>(&'a self, _symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>> {
        let response = self.quote.borrow_mut().take().unwrap();
        futures::future::ready(response).boxed_local()
    }

    fn refresh<'a>(
        &'a self,
        _symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }

    fn watchlist_add<'a>(
        &'a self,
        _symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }

    fn watchlist_remove<'a>(
        &'a self,
        _symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }

    fn watchlist_list(&self) -> LocalBoxFuture<'_, Result<Vec<WatchlistEntry>, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }
}

fn fixture(response: Result<QuoteRecord, AppError>) -> (Rc<RecordingModalView>, QuoteService) {
    let gateway = Rc::new(StubGateway { quote: RefCell::new(Some(response)) });
    let view = Rc::new(RecordingModalView::default());
    let service = QuoteService::new(gateway, view.clone());
    (view, service)
}

#[test]
fn open_shows_loading_then_the_formatted_quote() {
    let record = QuoteRecord {
        symbol: "AAPL".to_string(),
        company_name: Some("Apple Inc.".to_string()),
        current_price: Some(178.25),
        ..QuoteRecord::default()
    };
    let (view, service) = fixture(Ok(record));

    block_on(service.open("AAPL"));

    let events = view.events.borrow();
    assert_eq!(events[0], ModalEvent::Loading("AAPL".to_string()));
    match &events[1] {
        ModalEvent::Ready(quote) => {
            assert_eq!(quote.symbol, "AAPL");
            assert_eq!(quote.price, "$178.25");
        }
        other => panic!("expected a ready quote, got {other:?}"),
    }
}

#[test]
fn open_shows_loading_then_the_error_body() {
    let (view, service) = fixture(Err(AppError::Api("Stock not found".into())));

    block_on(service.open("ZZZZ"));

    let events = view.events.borrow();
    assert_eq!(events[0], ModalEvent::Loading("ZZZZ".to_string()));
    assert_eq!(events[1], ModalEvent::Failed("ZZZZ".to_string(), "Stock not found".to_string()));
}

#[test]
fn transport_errors_render_the_friendly_message() {
    let (view, service) = fixture(Err(AppError::Network("timeout".into())));

    block_on(service.open("AAPL"));

    assert_eq!(
        view.events.borrow().last(),
        Some(&ModalEvent::Failed(
            "AAPL".to_string(),
            "Unable to load data. Please try again.".to_string()
        ))
    );
}
