//! Network address discovery module
//!
//! Resolves the address peers on the same LAN should use to reach this
//! machine. The result is informational only; the listener binds
//! independently of it.

use std::io;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Resolve the LAN-facing IPv4 address of this machine.
///
/// Connects a datagram socket to a well-known public address so the OS
/// selects an outbound route, then reads the chosen local address back.
/// No packets are sent. Any socket error (no interface, no route, sandboxed
/// environment) yields the loopback address; startup never fails here.
pub fn local_ip(probe_addr: &str) -> IpAddr {
    route_probe(probe_addr).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

/// Run the route probe, surfacing socket errors to the caller
fn route_probe(probe_addr: &str) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(probe_addr)?;
    Ok(socket.local_addr()?.ip())
}

/// Format an HTTP URL for the given address and port
pub fn http_url(ip: IpAddr, port: u16) -> String {
    format!("http://{ip}:{port}")
}
