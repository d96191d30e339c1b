//! Minimal HTTP/1.1 server standing in for the plot service in integration tests.
//!
//! Answers every GET with a fixed body and content type, optionally failing
//! the first N requests with 503, and records each request target.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// 8-byte PNG signature followed by a marker; enough for content checks.
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nplot";

#[derive(Debug, Clone)]
pub struct PlotServerOptions {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Number of initial requests answered with 503 before serving normally.
    pub fail_first: usize,
}

impl Default for PlotServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "image/png",
            body: FAKE_PNG.to_vec(),
            fail_first: 0,
        }
    }
}

pub struct PlotServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PlotServer {
    /// Request targets (path + query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn start() -> PlotServer {
    start_with_options(PlotServerOptions::default())
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start_with_options(opts: PlotServerOptions) -> PlotServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let served = Arc::new(AtomicUsize::new(0));
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let seen = Arc::clone(&seen);
            let served = Arc::clone(&served);
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts, &seen, &served));
        }
    });
    PlotServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: &PlotServerOptions,
    seen: &Mutex<Vec<String>>,
    served: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut first = request.lines().next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let target = first.next().unwrap_or("").to_string();
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    seen.lock().unwrap().push(target);

    if served.fetch_add(1, Ordering::SeqCst) < opts.fail_first {
        let _ = stream.write_all(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        opts.content_type,
        opts.body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&opts.body);
}
