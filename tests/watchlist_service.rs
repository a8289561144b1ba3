use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use stock_search_wasm::application::ports::Notifier;
use stock_search_wasm::application::watchlist_service::WatchlistService;
use stock_search_wasm::domain::errors::AppError;
use stock_search_wasm::domain::notifications::ToastKind;
use stock_search_wasm::domain::search::{QuoteRecord, StockGateway, SuggestionItem, WatchlistEntry};

#[derive(Default)]
struct RecordingNotifier {
    toasts: RefCell<Vec<(ToastKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.borrow_mut().push((kind, message.to_string()));
    }
}

#[derive(Default)]
struct StubGateway {
    add: RefCell<Option<Result<String, AppError>>>,
    remove: RefCell<Option<Result<String, AppError>>>,
    refresh: RefCell<Option<Result<QuoteRecord, AppError>>>,
    list: RefCell<Option<Result<Vec<WatchlistEntry>, AppError>>>,
    calls: RefCell<Vec<String>>,
}

impl StockGateway for StubGateway {
    fn suggestions<'a>(
        &'a self,
        _query: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<SuggestionItem>, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }

    fn quote<'a>(&'a self, _symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>> {
        futures::future::ready(Err(AppError::Api("unused".into()))).boxed_local()
    }

    fn refresh<'a>(&'a self, symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>> {
        self.calls.borrow_mut().push(format!("refresh {symbol}"));
        futures::future::ready(self.refresh.borrow_mut().take().unwrap()).boxed_local()
    }

    fn watchlist_add<'a>(
        &'a self,
        symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>> {
        self.calls.borrow_mut().push(format!("add {symbol}"));
        futures::future::ready(self.add.borrow_mut().take().unwrap()).boxed_local()
    }

    fn watchlist_remove<'a>(
        &'a self,
        symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>> {
        self.calls.borrow_mut().push(format!("remove {symbol}"));
        futures::future::ready(self.remove.borrow_mut().take().unwrap()).boxed_local()
    }

    fn watchlist_list(&self) -> LocalBoxFuture<'_, Result<Vec<WatchlistEntry>, AppError>> {
        self.calls.borrow_mut().push("list".to_string());
        futures::future::ready(self.list.borrow_mut().take().unwrap()).boxed_local()
    }
}

fn fixture() -> (Rc<StubGateway>, Rc<RecordingNotifier>, WatchlistService) {
    let gateway = Rc::new(StubGateway::default());
    let notifier = Rc::new(RecordingNotifier::default());
    let service = WatchlistService::new(gateway.clone(), notifier.clone());
    (gateway, notifier, service)
}

#[test]
fn add_success_surfaces_the_backend_message() {
    let (gateway, notifier, service) = fixture();
    *gateway.add.borrow_mut() = Some(Ok("AAPL added to watchlist".to_string()));

    block_on(service.add(" aapl "));

    assert_eq!(gateway.calls.borrow().as_slice(), ["add AAPL"]);
    assert_eq!(
        notifier.toasts.borrow().as_slice(),
        [(ToastKind::Success, "AAPL added to watchlist".to_string())]
    );
}

#[test]
fn invalid_symbol_never_reaches_the_network() {
    let (gateway, notifier, service) = fixture();

    block_on(service.add("1abc"));

    assert!(gateway.calls.borrow().is_empty());
    assert_eq!(
        notifier.toasts.borrow().as_slice(),
        [(ToastKind::Error, "Symbol must start with a letter".to_string())]
    );
}

#[test]
fn remove_failure_shows_the_backend_error_verbatim() {
    let (gateway, notifier, service) = fixture();
    *gateway.remove.borrow_mut() = Some(Err(AppError::Api("ZZZZ is not in watchlist".into())));

    block_on(service.remove("ZZZZ"));

    assert_eq!(
        notifier.toasts.borrow().as_slice(),
        [(ToastKind::Error, "ZZZZ is not in watchlist".to_string())]
    );
}

#[test]
fn refresh_returns_the_fresh_record_and_toasts() {
    let (gateway, notifier, service) = fixture();
    let record = QuoteRecord {
        symbol: "MSFT".to_string(),
        current_price: Some(420.5),
        ..QuoteRecord::default()
    };
    *gateway.refresh.borrow_mut() = Some(Ok(record));

    let refreshed = block_on(service.refresh("msft")).unwrap();

    assert_eq!(refreshed.symbol, "MSFT");
    assert_eq!(
        notifier.toasts.borrow().as_slice(),
        [(ToastKind::Success, "MSFT data refreshed".to_string())]
    );
}

#[test]
fn list_failure_toasts_and_propagates() {
    let (gateway, notifier, service) = fixture();
    *gateway.list.borrow_mut() = Some(Err(AppError::Http(500)));

    let result = block_on(service.entries());

    assert!(result.is_err());
    assert_eq!(
        notifier.toasts.borrow().as_slice(),
        [(ToastKind::Error, "Request failed with status 500".to_string())]
    );
}
