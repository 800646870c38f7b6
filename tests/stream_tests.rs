use std::time::Duration;

use blaser::{BlaseballError, ClientConfig, DataStream, PrimaryClient};
use futures::StreamExt;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn client_for(mock_server: &MockServer) -> PrimaryClient {
    let config = ClientConfig::primary().with_base_url(mock_server.uri());
    PrimaryClient::with_config(config).unwrap()
}

async fn mount_stream(mock_server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/database/streamData"))
        .and(header("accept", "text/event-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/event-stream"))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_stream_yields_messages_then_ends_with_error() {
    let mock_server = MockServer::start().await;
    let body = concat!(
        "data: {\"value\":{\"games\":{\"sim\":{\"day\":43}}}}\n\n",
        "data: {\"value\":{\"games\":{\"sim\":{\"day\":44}}}}\n\n",
    );
    mount_stream(&mock_server, body).await;

    let client = client_for(&mock_server);
    let mut stream = client.stream_data().await.unwrap();
    assert!(stream.url().ends_with("/database/streamData"));

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first, json!({"value": {"games": {"sim": {"day": 43}}}}));
    let second = stream.next().await.unwrap().unwrap();
    assert_eq!(second["value"]["games"]["sim"]["day"], 44);

    let end = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(end, BlaseballError::Stream { .. }));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_invalid_message_does_not_end_stream() {
    let mock_server = MockServer::start().await;
    let body = concat!(
        "data: not json\n\n",
        ": keep-alive comment\n\n",
        "data: {\"ok\":true}\n\n",
    );
    mount_stream(&mock_server, body).await;

    let client = client_for(&mock_server);
    let mut stream = client.stream_data().await.unwrap();

    let bad = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(bad, BlaseballError::Decode { .. }));

    let good = stream.next().await.unwrap().unwrap();
    assert_eq!(good, json!({"ok": true}));
}

#[tokio::test]
async fn test_stream_refused_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/database/streamData"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.stream_data().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

/// Binds a raw listener so tests control pacing and how the socket ends.
async fn bind_local() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    (listener, base_url)
}

async fn read_request_head(socket: &mut TcpStream) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }
}

/// Accepts one subscription and writes the response head.
async fn accept_sse(listener: &TcpListener, extra_headers: &str) -> TcpStream {
    let (mut socket, _) = listener.accept().await.unwrap();
    read_request_head(&mut socket).await;
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\n{extra_headers}\r\n"
    );
    socket.write_all(head.as_bytes()).await.unwrap();
    socket
}

#[tokio::test]
async fn test_configured_timeout_does_not_cut_off_stream() {
    let (listener, base_url) = bind_local().await;
    let server = tokio::spawn(async move {
        let mut socket = accept_sse(&listener, "Connection: close\r\n").await;
        for n in 0..5 {
            let message = format!("data: {{\"n\":{n}}}\n\n");
            socket.write_all(message.as_bytes()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(400)).await;
        }
    });

    // Five messages 400ms apart outlast the one-second request timeout
    let config = ClientConfig::primary()
        .with_base_url(base_url)
        .with_timeout_seconds(1);
    let client = PrimaryClient::with_config(config).unwrap();
    let mut stream = client.stream_data().await.unwrap();

    for n in 0..5 {
        let message = stream.next().await.unwrap().unwrap();
        assert_eq!(message, json!({"n": n}));
    }
    let end = stream.next().await.unwrap().unwrap_err();
    assert!(matches!(end, BlaseballError::Stream { .. }));
    assert!(stream.next().await.is_none());

    server.await.unwrap();
}

async fn assert_connection_released(release: impl FnOnce(DataStream)) {
    let (listener, base_url) = bind_local().await;
    let server = tokio::spawn(async move {
        let mut socket = accept_sse(&listener, "Connection: close\r\n").await;
        socket.write_all(b"data: {\"n\":0}\n\n").await.unwrap();
        let mut buf = [0u8; 64];
        tokio::time::timeout(Duration::from_secs(3), socket.read(&mut buf)).await
    });

    let config = ClientConfig::primary().with_base_url(base_url);
    let client = PrimaryClient::with_config(config).unwrap();
    let mut stream = client.stream_data().await.unwrap();
    assert_eq!(stream.next().await.unwrap().unwrap(), json!({"n": 0}));

    release(stream);

    let read = server
        .await
        .unwrap()
        .expect("connection still open 3s after release");
    // EOF, or a reset if the client aborted the socket
    assert!(matches!(read, Ok(0) | Err(_)), "server read {read:?}");
}

#[tokio::test]
async fn test_close_releases_connection() {
    assert_connection_released(DataStream::close).await;
}

#[tokio::test]
async fn test_drop_releases_connection() {
    assert_connection_released(drop).await;
}

#[tokio::test]
async fn test_transport_failure_ends_stream_with_error() {
    let (listener, base_url) = bind_local().await;
    let server = tokio::spawn(async move {
        // Promise more body than is sent, then drop the socket mid-body
        let mut socket = accept_sse(&listener, "Content-Length: 4096\r\n").await;
        socket.write_all(b"data: {\"n\":0}\n\n").await.unwrap();
        socket.flush().await.unwrap();
    });

    let config = ClientConfig::primary().with_base_url(base_url);
    let client = PrimaryClient::with_config(config).unwrap();
    let mut stream = client.stream_data().await.unwrap();

    assert_eq!(stream.next().await.unwrap().unwrap(), json!({"n": 0}));
    match stream.next().await.unwrap().unwrap_err() {
        BlaseballError::Stream { message, .. } => {
            assert!(!message.contains("closed by server"), "got {message}");
        }
        other => panic!("expected Stream error, got {other:?}"),
    }
    assert!(stream.next().await.is_none());

    server.await.unwrap();
}
