use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use tinyserv::config::Config;
use tinyserv::http::connection::Connection;

fn temp_root(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tinyserv-{}-{}", test, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(root: PathBuf) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        server_name: "unit-test-server".to_string(),
        root,
    }
}

/// Drives one connection over an in-memory stream pair and returns the full
/// response split into (header block, body).
async fn exchange(root: PathBuf, request: &[u8]) -> (String, String) {
    let (mut client, server) = tokio::io::duplex(4096);
    let cfg = config(root);

    let task = tokio::spawn(async move {
        let mut conn = Connection::new(server, cfg);
        conn.run().await
    });

    client.write_all(request).await.unwrap();
    client.shutdown().await.unwrap();

    let mut buf = Vec::new();
    client.read_to_end(&mut buf).await.unwrap();
    task.await.unwrap().unwrap();

    let text = String::from_utf8(buf).unwrap();
    let (header, body) = text.split_once("\n\n").unwrap();
    (header.to_string(), body.to_string())
}

#[tokio::test]
async fn test_get_root_serves_index_with_substitution() {
    let root = temp_root("conn-index");
    std::fs::write(
        root.join("index.html"),
        "<html>\n<p><cs371server></p>\n</html>\n",
    )
    .unwrap();

    let (header, body) = exchange(root, b"GET / HTTP/1.1\n").await;

    assert!(header.starts_with("HTTP/1.1 200 OK\n"));
    assert!(header.contains("\nServer: unit-test-server\n"));
    assert!(header.contains("\nConnection: close\n"));
    assert!(header.ends_with("Content-Type: text/html"));
    assert_eq!(body, "<html><p>unit-test-server</p></html>");
}

#[tokio::test]
async fn test_get_missing_file_yields_404() {
    let root = temp_root("conn-missing");

    let (header, body) = exchange(root, b"GET /missing.html HTTP/1.1\n").await;

    assert!(header.starts_with("HTTP/1.1 404 Not Found\n"));
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn test_post_yields_501() {
    let root = temp_root("conn-post");

    let (header, body) = exchange(root, b"POST / HTTP/1.1\n").await;

    assert!(header.starts_with("HTTP/1.1 501 Not Implemented\n"));
    assert_eq!(body, "501 Not Implemented");
}

#[tokio::test]
async fn test_silent_client_yields_501() {
    let root = temp_root("conn-silent");

    // client closes without sending a request line
    let (header, body) = exchange(root, b"").await;

    assert!(header.starts_with("HTTP/1.1 501 Not Implemented\n"));
    assert_eq!(body, "501 Not Implemented");
}

#[tokio::test]
async fn test_empty_request_line_yields_501() {
    let root = temp_root("conn-empty-line");

    let (header, _body) = exchange(root, b"\n").await;

    assert!(header.starts_with("HTTP/1.1 501 Not Implemented\n"));
}

#[tokio::test]
async fn test_crlf_request_line_accepted() {
    let root = temp_root("conn-crlf");
    std::fs::write(root.join("index.html"), "hello\n").unwrap();

    let (header, body) = exchange(root, b"GET / HTTP/1.1\r\n").await;

    assert!(header.starts_with("HTTP/1.1 200 OK\n"));
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_named_target_served_relative_to_root() {
    let root = temp_root("conn-named");
    std::fs::write(root.join("about.html"), "about\n").unwrap();

    let (header, body) = exchange(root, b"GET /about.html HTTP/1.1\n").await;

    assert!(header.starts_with("HTTP/1.1 200 OK\n"));
    assert_eq!(body, "about");
}

#[tokio::test]
async fn test_traversal_target_refused() {
    let outer = temp_root("conn-traversal");
    let root = outer.join("webroot");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(outer.join("secret.txt"), "secret").unwrap();

    let (header, body) = exchange(root, b"GET /../secret.txt HTTP/1.1\n").await;

    assert!(header.starts_with("HTTP/1.1 404 Not Found\n"));
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn test_absolute_path_target_refused() {
    let outer = temp_root("conn-absolute");
    let root = outer.join("webroot");
    std::fs::create_dir_all(&root).unwrap();
    let secret = outer.join("secret.txt");
    std::fs::write(&secret, "secret").unwrap();

    // stripping one slash from a double-slash target leaves an absolute path
    let request = format!("GET /{} HTTP/1.1\n", secret.display());
    let (header, body) = exchange(root, request.as_bytes()).await;

    assert!(header.starts_with("HTTP/1.1 404 Not Found\n"));
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn test_only_first_line_is_consulted() {
    // Extra header lines after the request line change nothing
    let root = temp_root("conn-headers");
    std::fs::write(root.join("index.html"), "ok\n").unwrap();

    let (header, body) =
        exchange(root, b"GET / HTTP/1.1\nHost: example.com\nAccept: */*\n\n").await;

    assert!(header.starts_with("HTTP/1.1 200 OK\n"));
    assert_eq!(body, "ok");
}
