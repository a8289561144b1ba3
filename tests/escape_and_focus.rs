use stock_search_wasm::domain::search::{SearchController, SearchKey, SuggestionItem};

fn rendered_controller(query: &str) -> SearchController {
    let mut controller = SearchController::new();
    let generation = controller.on_input(query).unwrap();
    let plan = controller.debounce_fired(generation).unwrap();
    controller.on_response(
        &plan,
        Ok(vec![
            SuggestionItem::new("AAPL", "Apple Inc."),
            SuggestionItem::new("MSFT", "Microsoft Corporation"),
        ]),
    );
    controller
}

#[test]
fn escape_hides_but_keeps_input_and_rows() {
    let mut controller = rendered_controller("a");

    assert!(controller.on_key(SearchKey::Escape).is_none());
    assert!(!controller.is_visible());
    assert_eq!(controller.query(), "a");
    assert_eq!(controller.rows().len(), 2);
}

#[test]
fn focus_reshows_rows_for_the_unchanged_query() {
    let mut controller = rendered_controller("a");
    controller.on_key(SearchKey::Escape);

    controller.on_focus();
    assert!(controller.is_visible(), "same query re-show must be instant");
    assert_eq!(controller.rows().len(), 2);
}

#[test]
fn focus_does_not_reshow_after_the_query_changed() {
    let mut controller = rendered_controller("a");
    controller.on_key(SearchKey::Escape);
    controller.on_input("ab");

    controller.on_focus();
    assert!(!controller.is_visible(), "stale rows must stay hidden");
}

#[test]
fn outside_click_hides_the_list() {
    let mut controller = rendered_controller("a");

    controller.on_outside_click();
    assert!(!controller.is_visible());
    assert_eq!(controller.rows().len(), 2, "rows survive for focus re-show");
}

#[test]
fn focus_with_no_rendered_rows_is_inert() {
    let mut controller = SearchController::new();
    controller.on_input("msft");

    controller.on_focus();
    assert!(!controller.is_visible());
}
