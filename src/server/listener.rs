// Listener module
// Creates the TCP listener, with address reuse so a restart right after a
// shutdown does not fail while the old socket sits in TIME_WAIT

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create the listening socket for the server.
///
/// # Arguments
///
/// * `addr` - The socket address to bind to
/// * `reuse_address` - Enable `SO_REUSEADDR` before binding
///
/// # Returns
///
/// * `Ok(TcpListener)` - Successfully created and bound listener
/// * `Err(std::io::Error)` - Failed to create or bind socket; fatal at startup
pub fn bind(addr: SocketAddr, reuse_address: bool) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR: allows binding to a port in TIME_WAIT state
    if reuse_address {
        socket.set_reuse_address(true)?;
    }

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    // Bind and listen with a backlog queue size of 128
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio's
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
