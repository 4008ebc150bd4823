//! Minimal HTTP/1.1 server serving canned routes for fetcher tests.
//!
//! Binds an ephemeral port, then answers each request by exact path match
//! with an optional fallback for every other path. Runs until the test
//! process exits.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct Route {
    /// Exact request path, or `None` for the fallback route.
    path: Option<String>,
    content_type: String,
    body: Vec<u8>,
}

impl Route {
    pub fn exact(path: &str, content_type: &str, body: Vec<u8>) -> Self {
        Route {
            path: Some(path.to_string()),
            content_type: content_type.to_string(),
            body,
        }
    }

    /// Served for any path no exact route matches. Useful when the request
    /// path contains a random token the test cannot know in advance.
    pub fn fallback(content_type: &str, body: Vec<u8>) -> Self {
        Route {
            path: None,
            content_type: content_type.to_string(),
            body,
        }
    }
}

pub struct StubServer {
    listener: TcpListener,
    base_url: String,
}

impl StubServer {
    /// Bind an ephemeral local port. Routes often need the base URL in their
    /// bodies, so binding is separate from serving.
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let port = listener.local_addr().expect("local addr").port();
        StubServer {
            listener,
            base_url: format!("http://127.0.0.1:{}", port),
        }
    }

    /// Base URL without a trailing slash, ready for `Grabber::with_base_url`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start answering requests on a background thread. Unmatched paths get
    /// a 404 so dead-token scenarios can be simulated with no routes at all.
    pub fn serve(self, routes: Vec<Route>) {
        let routes = Arc::new(routes);
        thread::spawn(move || {
            for stream in self.listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                thread::spawn(move || handle(stream, &routes));
            }
        });
    }
}

fn handle(mut stream: TcpStream, routes: &[Route]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match request_path(request) {
        Some(p) => p,
        None => return,
    };

    let matched = routes
        .iter()
        .find(|r| r.path.as_deref() == Some(path))
        .or_else(|| routes.iter().find(|r| r.path.is_none()));

    match matched {
        Some(route) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                route.content_type,
                route.body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&route.body);
        }
        None => {
            let _ = stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        }
    }
}

/// Returns the request-target of the first request line, e.g. "/capture.png".
fn request_path(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    line.split_whitespace().nth(1)
}
