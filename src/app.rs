//! Leptos components of the interaction layer and the glue binding them to
//! the application services.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::application::ports::{Notifier, QuoteModalView, SearchView};
use crate::application::{QuoteService, SearchService, WatchlistService};
use crate::domain::formatting::truncate_text;
use crate::domain::notifications::{TOAST_MS, Toast, ToastKind, ToastState};
use crate::domain::search::entities::SuggestionItem;
use crate::domain::search::quote::{QuoteModalState, QuoteViewModel};
use crate::domain::search::repositories::StockGateway;
use crate::domain::search::{DEBOUNCE_MS, SearchKey};
use crate::event_utils::document_event_listener;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::http::urls::detail_page_url;
use crate::time_utils::format_last_updated;

/// Explicitly constructed application context: every signal the widgets render
/// from, passed around instead of a window-global namespace.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub input_value: RwSignal<String>,
    pub suggestions: RwSignal<Vec<SuggestionItem>>,
    pub selected: RwSignal<Option<usize>>,
    pub list_visible: RwSignal<bool>,
    pub search_error: RwSignal<Option<String>>,
    pub modal: RwSignal<QuoteModalState>,
    pub toast: RwSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            input_value: create_rw_signal(String::new()),
            suggestions: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            list_visible: create_rw_signal(false),
            search_error: create_rw_signal(None),
            modal: create_rw_signal(QuoteModalState::Closed),
            toast: create_rw_signal(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Search view rendered through the context signals.
struct LeptosSearchView {
    ctx: AppContext,
}

impl SearchView for LeptosSearchView {
    fn set_input_value(&self, value: &str) {
        self.ctx.input_value.set(value.to_string());
    }

    fn show_suggestions(&self, items: &[SuggestionItem], selected: Option<usize>) {
        self.ctx.suggestions.set(items.to_vec());
        self.ctx.selected.set(selected);
        self.ctx.search_error.set(None);
        self.ctx.list_visible.set(true);
    }

    fn hide_suggestions(&self) {
        self.ctx.list_visible.set(false);
    }

    fn show_error(&self, message: &str) {
        self.ctx.search_error.set(Some(message.to_string()));
        self.ctx.list_visible.set(true);
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

struct LeptosQuoteView {
    ctx: AppContext,
}

impl QuoteModalView for LeptosQuoteView {
    fn show_loading(&self, symbol: &str) {
        self.ctx.modal.set(QuoteModalState::Loading(symbol.to_string()));
    }

    fn show_quote(&self, quote: QuoteViewModel) {
        self.ctx.modal.set(QuoteModalState::Ready(quote));
    }

    fn show_error(&self, symbol: &str, message: &str) {
        self.ctx.modal.set(QuoteModalState::Failed {
            symbol: symbol.to_string(),
            message: message.to_string(),
        });
    }
}

/// Toast sink: one visible toast, auto-dismissed after [`TOAST_MS`]. The
/// generation check in [`ToastState`] keeps a late timer from killing a newer
/// toast; replacing the timeout drops (and thereby cancels) the previous one.
struct ToastNotifier {
    state: Rc<RefCell<ToastState>>,
    ctx: AppContext,
    timer: RefCell<Option<Timeout>>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        let generation = self.state.borrow_mut().show(kind, message);
        self.ctx.toast.set(self.state.borrow().current().cloned());

        let state = Rc::clone(&self.state);
        let toast_signal = self.ctx.toast;
        let timeout = Timeout::new(TOAST_MS, move || {
            if state.borrow_mut().dismiss(generation) {
                toast_signal.set(None);
            }
        });
        self.timer.borrow_mut().replace(timeout);
    }
}

/// Service bundle handed to the components and the JS-facing API.
#[derive(Clone)]
pub struct Services {
    pub search: Rc<SearchService>,
    pub quote: Rc<QuoteService>,
    pub watchlist: Rc<WatchlistService>,
    debounce: Rc<RefCell<Option<Timeout>>>,
}

impl Services {
    pub fn new(ctx: AppContext) -> Self {
        let gateway: Rc<dyn StockGateway> = Rc::new(ApiClient::new());
        let search_view: Rc<dyn SearchView> = Rc::new(LeptosSearchView { ctx });
        let quote_view: Rc<dyn QuoteModalView> = Rc::new(LeptosQuoteView { ctx });
        let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier {
            state: Rc::new(RefCell::new(ToastState::new())),
            ctx,
            timer: RefCell::new(None),
        });

        Self {
            search: Rc::new(SearchService::new(Rc::clone(&gateway), search_view)),
            quote: Rc::new(QuoteService::new(Rc::clone(&gateway), quote_view)),
            watchlist: Rc::new(WatchlistService::new(gateway, notifier)),
            debounce: Rc::new(RefCell::new(None)),
        }
    }

    /// Debounced input path: replacing the stored timeout drops the previous
    /// one, which cancels it, so only the newest quiet period can fire.
    pub fn handle_input(&self, text: &str) {
        let Some(generation) = self.search.on_input(text) else {
            return;
        };
        let search = Rc::clone(&self.search);
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            spawn_local(async move {
                search.debounce_fired(generation).await;
            });
        });
        self.debounce.borrow_mut().replace(timeout);
    }

    pub fn open_quote(&self, symbol: &str) {
        let quote = Rc::clone(&self.quote);
        let symbol = symbol.to_string();
        spawn_local(async move {
            quote.open(&symbol).await;
        });
    }

    pub fn add_to_watchlist(&self, symbol: &str) {
        let watchlist = Rc::clone(&self.watchlist);
        let symbol = symbol.to_string();
        spawn_local(async move {
            watchlist.add(&symbol).await;
        });
    }

    pub fn remove_from_watchlist(&self, symbol: &str) {
        let watchlist = Rc::clone(&self.watchlist);
        let symbol = symbol.to_string();
        spawn_local(async move {
            watchlist.remove(&symbol).await;
        });
    }

    /// Refresh backend data for a symbol, then reload so the server-rendered
    /// page picks up the fresh numbers.
    pub fn refresh_stock(&self, symbol: &str) {
        let watchlist = Rc::clone(&self.watchlist);
        let symbol = symbol.to_string();
        spawn_local(async move {
            if watchlist.refresh(&symbol).await.is_some() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
        });
    }
}

/// Root component: provides context and renders the widget, modal and toasts.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    let services = Services::new(ctx);
    provide_context(services.clone());
    crate::presentation::wasm_api::register_services(&services);

    view! {
        <style>{APP_STYLE}</style>
        <SearchWidget/>
        <QuoteModal/>
        <ToastHost/>
    }
}

/// Text input plus suggestion dropdown.
#[component]
pub fn SearchWidget() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<Services>();

    // Clicks anywhere outside the widget close the dropdown.
    {
        let services = services.clone();
        let handle = document_event_listener(ev::click, false, move |event: web_sys::MouseEvent| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.closest(".search-widget").ok().flatten())
                .is_some();
            if !inside {
                services.search.on_outside_click();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_input = {
        let services = services.clone();
        move |event: web_sys::Event| {
            services.handle_input(&event_target_value(&event));
        }
    };

    let on_keydown = {
        let services = services.clone();
        move |event: web_sys::KeyboardEvent| {
            let key = match event.key().as_str() {
                "ArrowDown" => SearchKey::ArrowDown,
                "ArrowUp" => SearchKey::ArrowUp,
                "Enter" => SearchKey::Enter,
                "Escape" => SearchKey::Escape,
                _ => return,
            };
            if key != SearchKey::Escape {
                event.prevent_default();
            }
            services.search.on_key(key);
        }
    };

    let on_focus = {
        let services = services.clone();
        move |_event: web_sys::FocusEvent| {
            services.search.on_focus();
        }
    };

    view! {
        <div class="search-widget">
            <input
                type="text"
                class="search-input"
                placeholder="Search stocks by symbol or company..."
                prop:value=move || ctx.input_value.get()
                on:input=on_input
                on:keydown=on_keydown
                on:focus=on_focus
            />
            <SuggestionList/>
        </div>
    }
}

#[component]
fn SuggestionList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<Services>();

    view! {
        <div
            class="suggestion-list"
            style:display=move || if ctx.list_visible.get() { "block" } else { "none" }
        >
            {move || match ctx.search_error.get() {
                Some(message) => view! {
                    <div class="suggestion-error">{message}</div>
                }
                .into_view(),
                None => ctx
                    .suggestions
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let services = services.clone();
                        view! {
                            <div
                                class=move || {
                                    if ctx.selected.get() == Some(index) {
                                        "suggestion-item selected"
                                    } else {
                                        "suggestion-item"
                                    }
                                }
                                on:mousedown=move |_| services.search.select(index)
                            >
                                <span class="suggestion-symbol">{item.symbol.clone()}</span>
                                <span class="suggestion-name">{truncate_text(&item.name, 48)}</span>
                            </div>
                        }
                    })
                    .collect_view(),
            }}
        </div>
    }
}

/// Quick-quote modal. The backdrop click and the close button both dismiss it.
#[component]
pub fn QuoteModal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let close = move |_event: web_sys::MouseEvent| ctx.modal.set(QuoteModalState::Closed);

    view! {
        <div
            class="quote-modal-backdrop"
            style:display=move || {
                if ctx.modal.get() == QuoteModalState::Closed { "none" } else { "flex" }
            }
            on:click=close
        >
            <div class="quote-modal" on:click=|event: web_sys::MouseEvent| event.stop_propagation()>
                <button class="quote-modal-close" on:click=close>"×"</button>
                {move || quote_modal_body(ctx.modal.get())}
            </div>
        </div>
    }
}

fn quote_modal_body(state: QuoteModalState) -> View {
    match state {
        QuoteModalState::Closed => ().into_view(),
        QuoteModalState::Loading(symbol) => view! {
            <div class="quote-loading">{format!("Loading {symbol}...")}</div>
            <a class="quote-details-link" href=detail_page_url(&symbol)>"View details"</a>
        }
        .into_view(),
        QuoteModalState::Failed { symbol, message } => view! {
            <div class="quote-error">{message}</div>
            <a class="quote-details-link" href=detail_page_url(&symbol)>"View details"</a>
        }
        .into_view(),
        QuoteModalState::Ready(quote) => {
            let details_href = detail_page_url(&quote.symbol);
            let last_updated = format_last_updated(&quote.last_updated);
            view! {
                <div class="quote-header">
                    <span class="quote-symbol">{quote.symbol}</span>
                    <span class="quote-company">{quote.company_name}</span>
                </div>
                <div class="quote-price-row">
                    <span class="quote-price">{quote.price}</span>
                    <span class=format!("quote-change {}", quote.change_class)>
                        {quote.change_text}
                    </span>
                </div>
                <dl class="quote-stats">
                    <dt>"Previous close"</dt>
                    <dd>{quote.previous_close}</dd>
                    <dt>"Market cap"</dt>
                    <dd>{quote.market_cap}</dd>
                    <dt>"Day range"</dt>
                    <dd>{quote.day_range}</dd>
                    <dt>"Volume"</dt>
                    <dd>{quote.volume}</dd>
                    <dt>"Last updated"</dt>
                    <dd>{last_updated}</dd>
                </dl>
                <a class="quote-details-link" href=details_href>"View details"</a>
            }
            .into_view()
        }
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        {move || {
            ctx.toast.get().map(|toast| {
                view! {
                    <div class=format!("toast {}", toast.kind.css_class())>{toast.message}</div>
                }
            })
        }}
    }
}

const APP_STYLE: &str = r#"
.search-widget { position: relative; max-width: 480px; }
.search-input { width: 100%; padding: 10px 14px; border: 1px solid #ccd4dd; border-radius: 8px; }
.suggestion-list { position: absolute; top: 100%; left: 0; right: 0; z-index: 100;
    background: #fff; border: 1px solid #ccd4dd; border-radius: 0 0 8px 8px;
    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12); }
.suggestion-item { display: flex; justify-content: space-between; gap: 12px;
    padding: 8px 14px; cursor: pointer; }
.suggestion-item.selected, .suggestion-item:hover { background: #eef3f9; }
.suggestion-symbol { font-weight: 600; }
.suggestion-name { color: #5a6572; overflow: hidden; white-space: nowrap; }
.suggestion-error { padding: 10px 14px; color: #b02a37; }
.quote-modal-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45);
    align-items: center; justify-content: center; z-index: 200; }
.quote-modal { position: relative; background: #fff; border-radius: 12px;
    padding: 24px; min-width: 320px; max-width: 420px; }
.quote-modal-close { position: absolute; top: 10px; right: 14px; border: none;
    background: none; font-size: 20px; cursor: pointer; }
.quote-price { font-size: 28px; font-weight: 700; }
.text-success { color: #198754; }
.text-danger { color: #dc3545; }
.text-muted { color: #6c757d; }
.quote-stats { display: grid; grid-template-columns: auto 1fr; gap: 4px 16px; }
.quote-error { color: #b02a37; padding: 12px 0; }
.toast { position: fixed; bottom: 24px; right: 24px; padding: 12px 18px;
    border-radius: 8px; color: #fff; z-index: 300; }
.toast-success { background: #198754; }
.toast-error { background: #dc3545; }
.toast-info { background: #0d6efd; }
"#;
