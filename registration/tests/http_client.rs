//! `HttpRegistrationClient` against a canned HTTP responder.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use fest_registration::mocks::fixtures;
use fest_registration::providers::{HttpRegistrationClient, RegistrationClient};
use fest_registration::{RegistrationError, RegistrationId};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one request with `status` and a JSON `body`, returning the endpoint URL.
async fn respond_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/api/register")
}

/// Read headers and a `Content-Length` body so the client never sees a reset.
async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return;
            }
        }
    }
}

#[tokio::test]
async fn test_success_envelope_is_returned() {
    let url = respond_once(
        "200 OK",
        concat!(
            r#"{"success":true,"id":42,"#,
            r#""message":"Registration successful! Check your email for confirmation."}"#,
        ),
    )
    .await;

    let response = HttpRegistrationClient::new(url)
        .submit(&fixtures::asha_request())
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.id, Some(RegistrationId(42)));
}

#[tokio::test]
async fn test_failure_envelope_is_rejected_with_message() {
    let url = respond_once(
        "400 Bad Request",
        r#"{"success":false,"message":"All fields are required."}"#,
    )
    .await;

    let error = HttpRegistrationClient::new(url)
        .submit(&fixtures::asha_request())
        .await
        .unwrap_err();

    assert_eq!(
        error,
        RegistrationError::Rejected { status: 400, message: "All fields are required.".into() }
    );
    assert_eq!(error.user_message(), "All fields are required.");
}

#[tokio::test]
async fn test_unreadable_error_body_falls_back() {
    let url = respond_once("502 Bad Gateway", "<html>bad gateway</html>").await;

    let error = HttpRegistrationClient::new(url)
        .submit(&fixtures::asha_request())
        .await
        .unwrap_err();

    assert!(matches!(error, RegistrationError::Rejected { status: 502, .. }));
    assert_eq!(error.user_message(), "Something went wrong. Please try again.");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = HttpRegistrationClient::new(format!("http://{addr}/api/register"))
        .submit(&fixtures::asha_request())
        .await
        .unwrap_err();

    assert!(matches!(error, RegistrationError::Transport(_)));
}
