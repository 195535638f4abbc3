//! Canned HTTP responses on a loopback socket.
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};
use url::Url;

async fn bind() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("loopback bind should succeed");
    let addr = listener.local_addr().expect("listener should have an addr");
    let url = format!("http://{addr}/in/a-z/")
        .parse()
        .expect("url should be valid");
    (listener, url)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await.expect("read should succeed");
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&request).into_owned()
}

/// Answers exactly one request, then closes. The handle resolves to the raw request head.
pub async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> (Url, JoinHandle<String>) {
    let (listener, url) = bind().await;
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept should succeed");
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write should succeed");
        stream.shutdown().await.ok();
        request
    });
    (url, handle)
}

/// Accepts a connection and never answers.
pub async fn serve_silently() -> Url {
    let (listener, url) = bind().await;
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept should succeed");
        let _request = read_request(&mut stream).await;
        std::future::pending::<()>().await;
    });
    url
}
