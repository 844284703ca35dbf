use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod net;
mod server;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = Config::load()?;

    // Optional positional argument overrides the port; a bad value is fatal
    // before any socket is bound
    let port_arg = std::env::args().nth(1);
    cfg.apply_port_arg(port_arg.as_deref())?;

    let addr = cfg.socket_addr()?;
    let listener = server::bind(addr, cfg.server.reuse_address)?;

    // Display-only: the listener is already bound on all interfaces
    let lan_ip = net::local_ip(&cfg.http.probe_addr);
    logger::log_server_start(&addr, lan_ip, &cfg);

    server::run(listener, Arc::new(cfg)).await;

    logger::log_shutdown();
    Ok(())
}
