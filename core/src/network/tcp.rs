use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Whether a TCP handshake with `addr:port` completes within `connect_timeout`.
pub async fn check_port(addr: IpAddr, port: u16, connect_timeout: Duration) -> bool {
    let socket_addr: SocketAddr = SocketAddr::new(addr, port);

    match timeout(connect_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(_refused)) => false,
        Err(_elapsed) => false,
    }
}

/// Tries `ports` in order and returns the first one that accepts a connection.
pub async fn first_open_port(addr: IpAddr, ports: &[u16], connect_timeout: Duration) -> Option<u16> {
    for port in ports {
        if check_port(addr, *port, connect_timeout).await {
            return Some(*port);
        }
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
