// Accept loop module
// Accepts connections until the interrupt signal fires

use super::{connection, signal};
use crate::config::Config;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections until interrupted.
///
/// Each accepted connection is served on its own task; accept errors are
/// logged and the loop keeps going. Returns once the interrupt arrives, with
/// no draining of in-flight requests.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run(listener: TcpListener, config: Arc<Config>) {
    let shutdown = signal::shutdown();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::spawn_serve(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = &mut shutdown => {
                break;
            }
        }
    }
}
