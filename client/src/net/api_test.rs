use super::*;

#[test]
fn analyze_failed_message_formats_status() {
    assert_eq!(analyze_failed_message(502), "analyze failed: 502");
}

#[test]
fn analyze_endpoint_is_same_origin() {
    assert!(ANALYZE_ENDPOINT.starts_with('/'));
}

#[test]
fn registrar_is_unavailable_outside_the_browser() {
    let account = Registration {
        username: "valid_user1".to_owned(),
        email: "user@example.com".to_owned(),
        password: "Abc12345!".to_owned(),
    };
    assert_eq!(futures::executor::block_on(ApiRegistrar.register(&account)), Err(SubmissionError::Unavailable));
}
