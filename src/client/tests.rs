use super::Client;

#[tokio::test]
async fn test_connect_to_closed_port_fails() {
    // Nothing listens on the discard port on loopback.
    let result = Client::connect("127.0.0.1:9").await;
    assert!(result.is_err());
}
