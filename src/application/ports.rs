//! View-side interfaces of the application layer.
//!
//! Services talk to the page exclusively through these traits; the Leptos
//! implementations live in the presentation layer and tests substitute
//! recording doubles.

use crate::domain::notifications::ToastKind;
use crate::domain::search::entities::SuggestionItem;
use crate::domain::search::quote::QuoteViewModel;

/// Rendering surface of the search widget.
pub trait SearchView {
    /// Overwrite the text input (used when a suggestion is committed).
    fn set_input_value(&self, value: &str);

    /// Replace the dropdown rows and the selection marker, and show the list.
    fn show_suggestions(&self, items: &[SuggestionItem], selected: Option<usize>);

    /// Hide the dropdown without touching the input.
    fn hide_suggestions(&self);

    /// Render an inline error notice where the rows would be.
    fn show_error(&self, message: &str);

    /// Full-page navigation.
    fn navigate(&self, url: &str);
}

/// Rendering surface of the quick-quote modal.
pub trait QuoteModalView {
    /// Open the modal with a loading placeholder and the details link already
    /// pointing at the symbol.
    fn show_loading(&self, symbol: &str);

    fn show_quote(&self, quote: QuoteViewModel);

    fn show_error(&self, symbol: &str, message: &str);
}

/// Transient toast notifications.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}
