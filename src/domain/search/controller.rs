//! Keyboard- and timer-driven state machine behind the search box.
//!
//! The controller is pure: it owns the widget state and tells the caller what
//! side effect to perform next (schedule a debounce, start a fetch, navigate).
//! Timers and HTTP live in the application and presentation layers, which keeps
//! every transition testable without a document tree.

use crate::domain::errors::AppError;
use crate::domain::search::entities::SuggestionItem;

/// Quiet period between the last keystroke and the suggestions request.
pub const DEBOUNCE_MS: u32 = 300;

/// Identity of one suggestions request. Responses carrying a token that is no
/// longer the latest are discarded, so a slow early response can never
/// overwrite newer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A fetch the controller has approved.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub query: String,
    pub token: RequestToken,
}

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Full-page navigation requested by a committed selection or a submitted
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Detail view of one symbol.
    Detail(String),
    /// Search results page for a free-text query.
    Results(String),
}

#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    debounce_generation: u64,
    token_counter: u64,
    latest_token: Option<RequestToken>,
    in_flight: bool,
    rows: Vec<SuggestionItem>,
    /// Query the current rows were fetched for; gates the focus re-show.
    rendered_for: Option<String>,
    selected: Option<usize>,
    visible: bool,
    error: Option<String>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A keystroke changed the input. Returns the debounce generation to
    /// schedule, or `None` when the text is unchanged. Scheduling a new
    /// generation implicitly invalidates every earlier one.
    pub fn on_input(&mut self, text: &str) -> Option<u64> {
        if text == self.query {
            return None;
        }
        self.query = text.to_string();
        self.debounce_generation += 1;
        Some(self.debounce_generation)
    }

    /// The debounce timer for `generation` fired. Produces a [`FetchPlan`]
    /// when a request should go out. An empty query clears and hides the list
    /// instead. A request already in flight suppresses a new one
    /// (single-flight).
    pub fn debounce_fired(&mut self, generation: u64) -> Option<FetchPlan> {
        if generation != self.debounce_generation {
            return None;
        }
        if self.query.is_empty() {
            self.clear_rows();
            return None;
        }
        if self.in_flight {
            return None;
        }

        self.in_flight = true;
        self.token_counter += 1;
        let token = RequestToken(self.token_counter);
        self.latest_token = Some(token);
        Some(FetchPlan { query: self.query.clone(), token })
    }

    /// A suggestions request settled. The in-flight flag clears no matter
    /// what; the response is applied only when it is still the latest and the
    /// input has not moved on. Returns whether the response was applied.
    pub fn on_response(
        &mut self,
        plan: &FetchPlan,
        result: Result<Vec<SuggestionItem>, AppError>,
    ) -> bool {
        self.in_flight = false;

        if self.latest_token != Some(plan.token) || plan.query != self.query {
            return false;
        }

        match result {
            Ok(rows) if rows.is_empty() => {
                // Zero results hide the list rather than showing an empty box.
                self.clear_rows();
            }
            Ok(rows) => {
                self.rows = rows;
                // Fresh lists open with the first row highlighted.
                self.selected = Some(0);
                self.visible = true;
                self.error = None;
                self.rendered_for = Some(plan.query.clone());
            }
            Err(error) => {
                self.rows.clear();
                self.selected = None;
                self.rendered_for = None;
                self.error = Some(error.user_message());
                self.visible = true;
            }
        }
        true
    }

    /// Keyboard navigation. Arrows move the single selected marker circularly;
    /// Enter commits the selection or submits the query; Escape hides the list
    /// without touching the input.
    pub fn on_key(&mut self, key: SearchKey) -> Option<Navigation> {
        match key {
            SearchKey::ArrowDown => {
                if self.visible && !self.rows.is_empty() {
                    self.selected = Some(match self.selected {
                        None => 0,
                        Some(index) => (index + 1) % self.rows.len(),
                    });
                }
                None
            }
            SearchKey::ArrowUp => {
                if self.visible && !self.rows.is_empty() {
                    self.selected = Some(match self.selected {
                        None | Some(0) => self.rows.len() - 1,
                        Some(index) => index - 1,
                    });
                }
                None
            }
            SearchKey::Enter => match self.selected.filter(|_| self.visible) {
                Some(index) => self.select(index),
                None if !self.query.is_empty() => Some(Navigation::Results(self.query.clone())),
                None => None,
            },
            SearchKey::Escape => {
                self.visible = false;
                None
            }
        }
    }

    /// Commit the row at `index`: the input takes the symbol, the list hides
    /// and the caller navigates to the detail view.
    pub fn select(&mut self, index: usize) -> Option<Navigation> {
        let symbol = self.rows.get(index)?.symbol.clone();
        self.query = symbol.clone();
        self.rendered_for = Some(symbol.clone());
        self.selected = None;
        self.visible = false;
        Some(Navigation::Detail(symbol))
    }

    /// Focus re-shows a hidden but still-populated list, but only when the
    /// input still holds the query the rows were fetched for.
    pub fn on_focus(&mut self) {
        if !self.visible
            && !self.rows.is_empty()
            && self.rendered_for.as_deref() == Some(self.query.as_str())
        {
            self.visible = true;
        }
    }

    /// A click landed outside the widget.
    pub fn on_outside_click(&mut self) {
        self.visible = false;
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
        self.selected = None;
        self.visible = false;
        self.error = None;
        self.rendered_for = None;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[SuggestionItem] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
