#![allow(dead_code)]

pub mod test_server {
    use paramedic::dispatcher::Dispatcher;
    use paramedic::middleware::TracingMiddleware;
    use paramedic::registry;
    use paramedic::router::Router;
    use paramedic::routes;
    use paramedic::server::{AppService, HttpServer, ServerHandle};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::{Arc, Once};
    use std::time::Duration;

    /// Ensures the may runtime is configured only once.
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
        });
    }

    /// Reserve an ephemeral port by binding and immediately releasing it.
    fn free_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr").port()
    }

    /// Start the demo app on an ephemeral port and wait for readiness.
    pub fn start_demo_server() -> (ServerHandle, String) {
        setup_may_runtime();

        let table = routes::table().expect("demo route table builds");
        let router = Router::new(table);
        let mut dispatcher = Dispatcher::new();
        unsafe { registry::register_all(&mut dispatcher) };
        dispatcher.add_middleware(Arc::new(TracingMiddleware));

        let service = AppService::new(router, dispatcher);
        let addr = format!("127.0.0.1:{}", free_port());
        let handle = HttpServer(service)
            .start(addr.as_str())
            .expect("start server");
        handle.wait_ready().expect("server ready");
        (handle, addr)
    }

    /// Send one HTTP/1.1 request over a raw TCP stream and return
    /// `(status, parsed JSON body)`.
    pub fn http_request(
        addr: &str,
        method: &str,
        target: &str,
        body: Option<&serde_json::Value>,
    ) -> (u16, serde_json::Value) {
        let mut stream = TcpStream::connect(addr).expect("connect");
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("set timeout");

        let payload = body.map(|b| b.to_string()).unwrap_or_default();
        let request = format!(
            "{method} {target} HTTP/1.1\r\n\
             Host: {addr}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{payload}",
            payload.len()
        );
        stream.write_all(request.as_bytes()).expect("send request");

        let raw = read_response(&mut stream);
        parse_response(&raw)
    }

    /// Read until the response headers plus the announced body length are in,
    /// tolerating servers that keep the connection open.
    fn read_response(stream: &mut TcpStream) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            if let Some(total) = expected_len(&buf) {
                if buf.len() >= total {
                    break;
                }
            }
            match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                Err(_) => break,
            }
        }
        buf
    }

    fn expected_len(buf: &[u8]) -> Option<usize> {
        let header_end = buf.windows(4).position(|w| w == b"\r\n\r\n")? + 4;
        let headers = String::from_utf8_lossy(&buf[..header_end]);
        let content_length = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.trim()
                    .eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        Some(header_end + content_length)
    }

    fn parse_response(raw: &[u8]) -> (u16, serde_json::Value) {
        let text = String::from_utf8_lossy(raw);
        let (head, body) = text
            .split_once("\r\n\r\n")
            .expect("response has header separator");
        let status: u16 = head
            .split_whitespace()
            .nth(1)
            .expect("status line has a code")
            .parse()
            .expect("status code parses");
        let body = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
        (status, body)
    }
}
