use super::*;

#[test]
fn methods_map_to_reqwest_verbs() {
    assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
    assert_eq!(reqwest_method(Method::Put), reqwest::Method::PUT);
    assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let transport = ReqwestTransport::new().unwrap();
    let request = HttpRequest { method: Method::Get, url: "http://127.0.0.1:9/api/vehicles".to_owned(), body: None };

    let err = transport.send(request).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
