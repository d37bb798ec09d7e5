use super::*;

#[test]
fn entity_fetch_error_interpolates_entity() {
    assert_eq!(entity_fetch_error("Version"), "Error while fetching Version!");
}

#[test]
fn toasts_get_unique_ids_and_can_be_dismissed() {
    let mut state = ToastState::default();
    let a = state.info("saved");
    let b = state.error("failed");
    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);

    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].message, "failed");
}

#[test]
fn api_error_prefers_server_message() {
    let mut state = ToastState::default();
    let err = ApiError::Status { status: 500, body: r#"{"message":"Search index unavailable"}"#.into() };
    state.api_error(&err, &entity_fetch_error("Version"));
    assert_eq!(state.toasts[0].message, "Search index unavailable");
}

#[test]
fn api_error_falls_back_to_generic_message() {
    let mut state = ToastState::default();
    state.api_error(&ApiError::Request("offline".into()), &entity_fetch_error("Version"));
    assert_eq!(state.toasts[0].message, "Error while fetching Version!");
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}
