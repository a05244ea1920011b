//! Unit tests for the `ppaste` CLI entrypoint module.

use super::{run, Cli};
use clap::Parser;
use pastepad_core::ClientError;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Bind an ephemeral listener that answers one request with a canned
/// response, and return the server URL pointing at it.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0_u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}", addr)
}

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("ppaste").chain(args.iter().copied()))
}

#[test]
fn new_prints_the_share_url() {
    let server = serve_once(
        "201 Created",
        r#"{"ok":true,"result":{"key":"abc123","content":"print(1)"}}"#,
    );

    let dir = tempfile::TempDir::new().expect("temp dir");
    let input = dir.path().join("snippet.py");
    std::fs::write(&input, "print(1)").expect("write input");

    let output = run(cli(&[
        "--server",
        &server,
        "new",
        "--file",
        input.to_str().expect("utf8 path"),
    ]))
    .expect("create");
    assert_eq!(output, format!("{}/abc123", server));
}

#[test]
fn get_prints_content_or_full_json() {
    let body = r#"{"ok":true,"result":{"key":"xyz","content":"hello"}}"#;

    let server = serve_once("200 OK", body);
    let output = run(cli(&["--server", &server, "get", "xyz"])).expect("get");
    assert_eq!(output, "hello");

    let server = serve_once("200 OK", body);
    let output = run(cli(&["--server", &server, "--json", "get", "xyz"])).expect("get json");
    assert!(output.contains(r#""key": "xyz""#));
    assert!(output.contains(r#""content": "hello""#));
}

#[test]
fn raw_builds_the_url_without_any_request() {
    let output = run(cli(&["--server", "http://paste.test", "raw", "xyz"])).expect("raw");
    assert_eq!(output, "http://paste.test/raw/xyz");
}

#[test]
fn ping_reports_server_rejection() {
    let server = serve_once("500 Internal Server Error", "");
    match run(cli(&["--server", &server, "ping"])) {
        Err(ClientError::Rejected(msg)) => assert_eq!(msg, "HTTP 500"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn server_error_message_reaches_the_user() {
    let server = serve_once("429 Too Many Requests", r#"{"ok":false,"error":"TOO_FAST"}"#);
    let err = run(cli(&["--server", &server, "get", "xyz"])).expect_err("rate limited");
    assert_eq!(err.user_message(), "TOO_FAST");
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Nothing listens here; connect fails before any HTTP exchange.
    match run(cli(&["--server", "http://127.0.0.1:9", "ping"])) {
        Err(ClientError::Transport(_)) => {}
        other => panic!("unexpected: {:?}", other),
    }
}
