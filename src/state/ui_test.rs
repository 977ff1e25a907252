use super::*;

// =============================================================
// ToastLevel
// =============================================================

#[test]
fn toast_level_default_is_info() {
    assert_eq!(ToastLevel::default(), ToastLevel::Info);
}

#[test]
fn toast_level_indicators_are_distinct() {
    let levels = [
        ToastLevel::Info,
        ToastLevel::Success,
        ToastLevel::Warning,
        ToastLevel::Error,
    ];
    for (i, a) in levels.iter().enumerate() {
        for (j, b) in levels.iter().enumerate() {
            if i != j {
                assert_ne!(a.indicator(), b.indicator());
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }
}

// =============================================================
// Toast builders
// =============================================================

#[test]
fn toast_new_defaults() {
    let toast = Toast::new("hello");
    assert_eq!(toast.message, "hello");
    assert_eq!(toast.level, ToastLevel::Info);
    assert_eq!(toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
    assert_eq!(toast.description, None);
    assert_eq!(toast.action, None);
}

#[test]
fn toast_error_sets_level() {
    assert_eq!(Toast::error("boom").level, ToastLevel::Error);
    assert_eq!(Toast::warning("hm").level, ToastLevel::Warning);
    assert_eq!(Toast::success("ok").level, ToastLevel::Success);
    assert_eq!(Toast::info("fyi").level, ToastLevel::Info);
}

#[test]
fn toast_builder_chain() {
    let toast = Toast::error("no access")
        .with_description("details here")
        .with_duration_ms(5000)
        .with_action("Create Account", "/auth?form=signup");
    assert_eq!(toast.description.as_deref(), Some("details here"));
    assert_eq!(toast.duration_ms, 5000);
    let action = toast.action.unwrap();
    assert_eq!(action.label, "Create Account");
    assert_eq!(action.to, "/auth?form=signup");
}

#[test]
fn toast_ids_are_unique() {
    assert_ne!(Toast::new("a").id, Toast::new("a").id);
}

// =============================================================
// UiState toast queue
// =============================================================

#[test]
fn push_toast_returns_id_and_appends() {
    let mut state = UiState::default();
    let id = state.push_toast(Toast::info("first"));
    state.push_toast(Toast::info("second"));
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].message, "first");
}

#[test]
fn dismiss_toast_removes_only_matching() {
    let mut state = UiState::default();
    let first = state.push_toast(Toast::info("first"));
    let second = state.push_toast(Toast::info("second"));
    state.dismiss_toast(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_toast_is_noop() {
    let mut state = UiState::default();
    state.push_toast(Toast::info("only"));
    state.dismiss_toast("no-such-id");
    assert_eq!(state.toasts.len(), 1);
}
