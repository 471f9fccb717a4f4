use may::coroutine::JoinHandle;
use may_minihttp::HttpService;
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;

/// Wrapper around `may_minihttp`'s HTTP server with a typed start/stop/join
/// handle.
pub struct HttpServer<T>(pub T);

/// Handle to a running HTTP server.
pub struct ServerHandle {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ServerHandle {
    /// Wait for the server to accept connections.
    ///
    /// Polls the bound address with plain TCP connects; useful in tests to
    /// avoid racing the server startup.
    ///
    /// # Errors
    ///
    /// `TimedOut` if the server is not reachable within ~250ms.
    pub fn wait_ready(&self) -> io::Result<()> {
        for _ in 0..50 {
            if TcpStream::connect(self.addr).is_ok() {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(5));
        }
        Err(io::Error::new(io::ErrorKind::TimedOut, "server not ready"))
    }

    /// Stop the server, cancelling its coroutine and waiting for it to exit.
    pub fn stop(self) {
        // SAFETY: cancel is unsafe per the may runtime; the handle is valid
        // and cancellation is the intended shutdown path here.
        unsafe {
            self.handle.coroutine().cancel();
        }
        let _ = self.handle.join();
    }

    /// Block until the server coroutine finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the server coroutine panicked.
    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

impl<T: HttpService + Clone + Send + Sync + 'static> HttpServer<T> {
    /// Start the HTTP server on the given address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or the port cannot be
    /// bound.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid address"))?;
        let handle = may_minihttp::HttpServer(self.0).start(addr)?;
        Ok(ServerHandle { addr, handle })
    }
}
