// MyMemory client against a loopback HTTP responder

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use tradutor::client::{MyMemoryClient, Translate};
use tradutor::error::TranslateError;
use tradutor::state::{Action, TranslationRequest, ViewState};
use tradutor::view::TranslatorView;

/// Accept one connection, answer with `status` and `body`, and return the
/// request line that was received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut read = 0;
        loop {
            let n = socket.read(&mut buf[read..]).await.unwrap();
            read += n;
            if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        let request = String::from_utf8_lossy(&buf[..read]).into_owned();
        request.lines().next().unwrap_or_default().to_string()
    });

    (format!("http://{addr}/get"), handle)
}

fn request(text: &str) -> TranslationRequest {
    TranslationRequest {
        seq: 1,
        text: text.to_string(),
        source_lang: "pt-br".to_string(),
        target_lang: "en".to_string(),
    }
}

/// Loopback traffic must not go through a proxy from the environment.
fn client(endpoint: &str) -> MyMemoryClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    MyMemoryClient::with_http_client(http, endpoint)
}

#[tokio::test]
async fn test_success_sends_encoded_query() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"responseData":{"translatedText":"Hello world"},"responseStatus":200}"#,
    )
    .await;

    let result = client(&endpoint).translate(&request("Olá mundo")).await;
    assert_eq!(result, Ok("Hello world".to_string()));

    let request_line = server.await.unwrap();
    assert_eq!(
        request_line,
        "GET /get?q=Ol%C3%A1%20mundo&langpair=pt-br|en HTTP/1.1"
    );
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "{}").await;

    let result = client(&endpoint).translate(&request("oi")).await;
    assert_eq!(result, Err(TranslateError::Http { status: 500 }));
    server.await.unwrap();
}

#[tokio::test]
async fn test_unexpected_body_is_malformed() {
    let (endpoint, server) = serve_once("200 OK", r#"{"matches":[]}"#).await;

    let result = client(&endpoint).translate(&request("oi")).await;
    assert!(matches!(result, Err(TranslateError::MalformedResponse(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(&format!("http://{addr}/get"))
        .translate(&request("oi"))
        .await;
    assert!(matches!(result, Err(TranslateError::Transport(_))));
}

#[tokio::test]
async fn test_contact_email_is_sent() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"responseData":{"translatedText":"Hi"}}"#,
    )
    .await;

    let client = client(&endpoint).with_contact_email(Some("me@example.com".to_string()));
    assert_eq!(client.translate(&request("Oi")).await, Ok("Hi".to_string()));

    let request_line = server.await.unwrap();
    assert!(request_line.contains("&de=me%40example.com"));
}

#[tokio::test]
async fn test_view_shows_translation_from_server() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"responseData":{"translatedText":"Hello world"},"responseStatus":200}"#,
    )
    .await;

    let mut view = TranslatorView::new(
        ViewState::default(),
        Duration::from_millis(500),
        Arc::new(client(&endpoint)),
        tokio::runtime::Handle::current(),
    );
    let start = Instant::now();

    view.dispatch_at(start, Action::SetSourceText("Olá mundo".to_string()));
    view.tick(start + Duration::from_millis(500));
    assert!(view.state().is_loading);
    view.settle_next().await;

    assert_eq!(view.state().translated_text, "Hello world");
    assert!(view.state().error.is_empty());
    assert!(!view.state().is_loading);
    server.await.unwrap();
}
