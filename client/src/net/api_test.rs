use super::*;
use crate::net::types::{Page, Product};

// =============================================================
// decode_response
// =============================================================

#[test]
fn decode_unwraps_envelope_data() {
    let body = r#"{"success":true,"message":null,"data":{"content":[],"totalElements":0,"totalPages":0,"size":20,"number":0},"timestamp":"t"}"#;
    let page: Page<Product> = decode_response(200, body, true).unwrap();
    assert_eq!(page.size, 20);
    assert!(page.content.is_empty());
}

#[test]
fn decode_accepts_bare_payload() {
    let users: Vec<String> = decode_response(200, r#"["a","b"]"#, true).unwrap();
    assert_eq!(users, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn decode_accepts_empty_body_for_unit_payload() {
    let value: serde_json::Value = decode_response(204, "", true).unwrap();
    assert!(value.is_null());
}

#[test]
fn decode_rejects_unsuccessful_envelope() {
    let body = r#"{"success":false,"message":"Insufficient stock","data":null}"#;
    let err = decode_response::<Option<i64>>(200, body, true).unwrap_err();
    assert_eq!(err, ApiError::Http { status: 200, message: "Insufficient stock".to_owned() });
}

#[test]
fn decode_reports_shape_mismatch() {
    let err = decode_response::<Page<Product>>(200, r#"{"unexpected":true}"#, true).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_maps_401_to_unauthorized_for_session_calls() {
    let err = decode_response::<serde_json::Value>(401, "{}", true).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn decode_keeps_401_message_for_anonymous_calls() {
    let body = r#"{"status":401,"message":"Invalid username or password","errorCode":"AUTH_FAILED"}"#;
    let err = decode_response::<serde_json::Value>(401, body, false).unwrap_err();
    assert_eq!(err.user_message("fallback"), "Invalid username or password");
}

#[test]
fn decode_extracts_error_body_message() {
    let body = r#"{"status":409,"message":"SKU already exists","errorCode":"DUPLICATE_RESOURCE","path":"/api/products"}"#;
    let err = decode_response::<serde_json::Value>(409, body, true).unwrap_err();
    assert_eq!(err, ApiError::Http { status: 409, message: "SKU already exists".to_owned() });
}

#[test]
fn decode_non_json_error_has_empty_message() {
    let err = decode_response::<serde_json::Value>(502, "<html>Bad Gateway</html>", true).unwrap_err();
    assert_eq!(err, ApiError::Http { status: 502, message: String::new() });
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn user_message_falls_back_without_server_message() {
    assert_eq!(ApiError::Timeout.user_message("Action failed"), "Action failed");
    let blank = ApiError::Http { status: 400, message: "  ".to_owned() };
    assert_eq!(blank.user_message("Failed"), "Failed");
}

#[test]
fn transient_errors_are_network_timeout_and_5xx() {
    assert!(ApiError::Network("reset".to_owned()).is_transient());
    assert!(ApiError::Timeout.is_transient());
    assert!(ApiError::Http { status: 503, message: String::new() }.is_transient());
    assert!(!ApiError::Http { status: 404, message: String::new() }.is_transient());
    assert!(!ApiError::Unauthorized.is_transient());
    assert!(!ApiError::Decode("x".to_owned()).is_transient());
}

#[test]
fn request_url_prefixes_api_base() {
    assert_eq!(request_url("/products?page=0"), "/api/products?page=0");
}

// =============================================================
// on_unauthorized
// =============================================================

#[test]
fn unauthorized_clears_session_keys_then_goes_to_login() {
    let log = std::cell::RefCell::new(Vec::new());
    on_unauthorized(
        |key| log.borrow_mut().push(format!("remove {key}")),
        |path| log.borrow_mut().push(format!("navigate {path}")),
    );
    assert_eq!(log.into_inner(), vec!["remove erp_token", "remove erp_user", "navigate /login"]);
}

// =============================================================
// with_timeout
// =============================================================

#[test]
fn timeout_covers_a_body_that_never_finishes() {
    use futures::future::{pending, ready};

    let exchange = async {
        let status = ready(200_u16).await;
        let body: String = pending().await;
        Ok((status, body))
    };
    let result = futures::executor::block_on(with_timeout(exchange, ready(())));
    assert_eq!(result, Err(ApiError::Timeout));
}

#[test]
fn completed_exchange_wins_over_pending_timer() {
    let exchange = async { Ok((200_u16, "{}".to_owned())) };
    let result = futures::executor::block_on(with_timeout(exchange, futures::future::pending()));
    assert_eq!(result, Ok((200, "{}".to_owned())));
}
