//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y le habla
//! con requests crudos por TcpStream.

use flate2::read::GzDecoder;
use mini_http_server::config::Config;
use mini_http_server::server::Server;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Helper: directorio temporal único por test
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mini_http_it_{}_{}_{}",
        name,
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Helper: arranca un servidor en 127.0.0.1:0 sirviendo `dir`
fn start_server(dir: &Path) -> SocketAddr {
    let mut config = Config::default();
    config.port = 0;
    config.directory = dir.to_string_lossy().into_owned();

    let server = Server::bind(config).expect("bind");
    let addr = server.local_addr().unwrap();
    thread::spawn(move || server.run());
    addr
}

/// Helper: envía bytes crudos y lee la respuesta completa
fn send_raw(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.write_all(request).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

/// Helper: separa (head, body) en la primera línea vacía
fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("missing header terminator");
    (
        String::from_utf8_lossy(&response[..pos + 4]).into_owned(),
        response[pos + 4..].to_vec(),
    )
}

#[test]
fn test_root_endpoint() {
    let dir = temp_dir("root");
    let addr = start_server(&dir);

    let response = send_raw(addr, b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n");

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 13\r\n\r\nHello, World!"
    );
}

#[test]
fn test_user_agent_endpoint() {
    let dir = temp_dir("ua");
    let addr = start_server(&dir);

    let response = send_raw(
        addr,
        b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: foobar/1.2.3\r\n\r\n",
    );
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Length: 12\r\n"));
    assert_eq!(body, b"foobar/1.2.3");
}

#[test]
fn test_user_agent_missing() {
    let dir = temp_dir("ua_missing");
    let addr = start_server(&dir);

    let (_, body) = split_response(&send_raw(addr, b"GET /user-agent HTTP/1.1\r\n\r\n"));

    assert_eq!(body, b"Unknown");
}

#[test]
fn test_echo_endpoint() {
    let dir = temp_dir("echo");
    let addr = start_server(&dir);

    let (head, body) = split_response(&send_raw(addr, b"GET /echo/raspberry HTTP/1.1\r\n\r\n"));

    assert!(head.contains("Content-Type: text/plain\r\n"));
    assert!(!head.contains("Content-Encoding"));
    assert_eq!(body, b"raspberry");
}

#[test]
fn test_echo_gzip() {
    let dir = temp_dir("gzip");
    let addr = start_server(&dir);

    let response = send_raw(
        addr,
        b"GET /echo/banana HTTP/1.1\r\nAccept-Encoding: deflate, gzip\r\n\r\n",
    );
    let (head, body) = split_response(&response);

    assert!(head.contains("Content-Encoding: gzip\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", body.len())));

    let mut decoded = String::new();
    GzDecoder::new(&body[..]).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "banana");
}

#[test]
fn test_get_file() {
    let dir = temp_dir("get_file");
    fs::write(dir.join("apple"), b"pear mango").unwrap();
    let addr = start_server(&dir);

    let (head, body) = split_response(&send_raw(addr, b"GET /files/apple HTTP/1.1\r\n\r\n"));

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: application/octet-stream\r\n"));
    assert!(head.contains("Content-Length: 10\r\n"));
    assert_eq!(body, b"pear mango");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_get_missing_file() {
    let dir = temp_dir("missing_file");
    let addr = start_server(&dir);

    let response = send_raw(addr, b"GET /files/non_existent HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_post_then_get_file() {
    let dir = temp_dir("post_get");
    let addr = start_server(&dir);

    let response = send_raw(
        addr,
        b"POST /files/notes HTTP/1.1\r\nContent-Type: application/octet-stream\r\nContent-Length: 11\r\n\r\nhello world",
    );
    assert_eq!(response, b"HTTP/1.1 201 Created\r\n\r\n");

    let (_, body) = split_response(&send_raw(addr, b"GET /files/notes HTTP/1.1\r\n\r\n"));
    assert_eq!(body, b"hello world");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_post_into_missing_directory() {
    let dir = temp_dir("post_missing");
    let addr = start_server(&dir);

    let response = send_raw(addr, b"POST /files/nope/inner HTTP/1.1\r\n\r\ndata");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_not_found() {
    let dir = temp_dir("not_found");
    let addr = start_server(&dir);

    let response = send_raw(addr, b"GET /nonexistent HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_malformed_request_closes_without_response() {
    let dir = temp_dir("malformed");
    let addr = start_server(&dir);

    let response = send_raw(addr, b"GET / HTTP/1.1\r\nno-separator\r\n\r\n");

    assert!(response.is_empty());
}

#[test]
fn test_concurrent_connections() {
    let dir = temp_dir("concurrent");
    let addr = start_server(&dir);

    // Abrir ambas conexiones antes de enviar nada
    let mut first = TcpStream::connect(addr).unwrap();
    let mut second = TcpStream::connect(addr).unwrap();

    second.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();
    first.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();

    let expected: &[u8] =
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 13\r\n\r\nHello, World!";

    for stream in [&mut first, &mut second] {
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, expected);
    }
}

#[test]
fn test_many_parallel_clients() {
    let dir = temp_dir("parallel");
    let addr = start_server(&dir);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let request = format!("GET /echo/client{} HTTP/1.1\r\n\r\n", i);
                let (_, body) = split_response(&send_raw(addr, request.as_bytes()));
                assert_eq!(body, format!("client{}", i).into_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
