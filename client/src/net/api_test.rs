use super::*;

#[test]
fn transport_failed_message_names_method_and_url() {
    assert_eq!(
        transport_failed_message(Method::Delete, "http://x/api/vehicles/1", "offline"),
        "DELETE http://x/api/vehicles/1 failed: offline"
    );
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_has_no_transport() {
    let request = HttpRequest { method: Method::Get, url: "http://x/api/auth/check-session".to_owned(), body: None };
    let err = BrowserTransport.send(request).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
