use stock_search_wasm::domain::notifications::{ToastKind, ToastState};

#[test]
fn showing_replaces_the_visible_toast() {
    let mut state = ToastState::new();
    state.show(ToastKind::Info, "first");
    state.show(ToastKind::Success, "second");

    let toast = state.current().unwrap();
    assert_eq!(toast.message, "second");
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn stale_timer_cannot_dismiss_a_newer_toast() {
    let mut state = ToastState::new();
    let first = state.show(ToastKind::Info, "first");
    let second = state.show(ToastKind::Error, "second");

    assert!(!state.dismiss(first), "superseded generation is inert");
    assert_eq!(state.current().unwrap().message, "second");

    assert!(state.dismiss(second));
    assert!(state.current().is_none());
}

#[test]
fn dismissing_twice_is_a_no_op() {
    let mut state = ToastState::new();
    let generation = state.show(ToastKind::Success, "Added AAPL to watchlist");

    assert!(state.dismiss(generation));
    assert!(!state.dismiss(generation));
}

#[test]
fn kind_maps_to_its_css_class() {
    assert_eq!(ToastKind::Success.css_class(), "toast-success");
    assert_eq!(ToastKind::Error.css_class(), "toast-error");
    assert_eq!(ToastKind::Info.css_class(), "toast-info");
}
