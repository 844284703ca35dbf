// Connection handling module
// Serves a single accepted TCP connection on its own task

use crate::config::Config;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve an accepted connection in a spawned task.
///
/// Every request on the connection is dispatched to the request handler.
/// Connection-level errors are logged and never tear down the accept loop.
pub fn spawn_serve(stream: tokio::net::TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, config, peer_addr).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger::log_connection_error(&err);
        }
    });
}
