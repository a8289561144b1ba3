use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::logging::LogComponent;
use crate::domain::search::controller::{Navigation, SearchController, SearchKey};
use crate::domain::search::repositories::StockGateway;
use crate::{application::ports::SearchView, log_debug, log_warn};

use crate::infrastructure::http::urls::{detail_page_url, results_page_url};

/// Coordinates the search controller with the backend and the view.
///
/// Timer ownership stays with the caller: `on_input` hands back the debounce
/// generation and the presentation layer schedules `debounce_fired` after the
/// quiet period. That keeps this service free of browser types and fully
/// drivable from native tests.
pub struct SearchService {
    controller: RefCell<SearchController>,
    gateway: Rc<dyn StockGateway>,
    view: Rc<dyn SearchView>,
}

impl SearchService {
    pub fn new(gateway: Rc<dyn StockGateway>, view: Rc<dyn SearchView>) -> Self {
        Self { controller: RefCell::new(SearchController::new()), gateway, view }
    }

    /// Input changed. Returns the debounce generation the caller must fire
    /// after [`crate::domain::search::DEBOUNCE_MS`], or `None` for unchanged
    /// text.
    pub fn on_input(&self, text: &str) -> Option<u64> {
        self.controller.borrow_mut().on_input(text)
    }

    /// The debounce timer fired; issue the request when the controller still
    /// wants it. Failures become an inline notice, never a retry.
    pub async fn debounce_fired(&self, generation: u64) {
        let plan = self.controller.borrow_mut().debounce_fired(generation);
        let Some(plan) = plan else {
            // Stale timer, empty query or an in-flight request: state may have
            // collapsed to hidden, so mirror it either way.
            self.sync_view();
            return;
        };

        log_debug!(
            LogComponent::Application("Search"),
            "🔍 Fetching suggestions for '{}'",
            plan.query
        );
        let result = self.gateway.suggestions(&plan.query).await;
        if let Err(error) = &result {
            log_warn!(
                LogComponent::Application("Search"),
                "Suggestions for '{}' failed: {}",
                plan.query,
                error
            );
        }

        let applied = self.controller.borrow_mut().on_response(&plan, result);
        if applied {
            self.sync_view();
        }
    }

    /// Keyboard event from the input element.
    pub fn on_key(&self, key: SearchKey) {
        let navigation = self.controller.borrow_mut().on_key(key);
        self.sync_view();
        self.perform_navigation(navigation);
    }

    /// Mouse commit of the row at `index`.
    pub fn select(&self, index: usize) {
        let navigation = self.controller.borrow_mut().select(index);
        self.sync_view();
        self.perform_navigation(navigation);
    }

    pub fn on_focus(&self) {
        self.controller.borrow_mut().on_focus();
        self.sync_view();
    }

    pub fn on_outside_click(&self) {
        self.controller.borrow_mut().on_outside_click();
        self.sync_view();
    }

    fn perform_navigation(&self, navigation: Option<Navigation>) {
        match navigation {
            Some(Navigation::Detail(symbol)) => {
                self.view.set_input_value(&symbol);
                self.view.navigate(&detail_page_url(&symbol));
            }
            Some(Navigation::Results(query)) => {
                self.view.navigate(&results_page_url(&query));
            }
            None => {}
        }
    }

    /// Push the controller state at the view.
    fn sync_view(&self) {
        let controller = self.controller.borrow();
        if !controller.is_visible() {
            self.view.hide_suggestions();
        } else if let Some(message) = controller.error() {
            self.view.show_error(message);
        } else {
            self.view.show_suggestions(controller.rows(), controller.selected());
        }
    }
}
