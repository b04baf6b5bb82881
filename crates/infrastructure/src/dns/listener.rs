use super::errors::ServerError;
use super::handler::DnsServerHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// A running UDP listener.
pub struct ServerHandle {
    local_addr: SocketAddr,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Address actually bound; differs from the requested one for port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown(self) {
        self.task.abort();
    }
}

/// Binds `bind_addr` and serves it on a spawned task. hickory-server handles
/// each datagram on its own task.
pub async fn spawn_udp_server(
    handler: DnsServerHandler,
    bind_addr: SocketAddr,
) -> Result<ServerHandle, ServerError> {
    let socket = create_udp_socket(bind_addr).map_err(|source| ServerError::Bind {
        addr: bind_addr,
        source,
    })?;
    let local_addr = socket.local_addr()?;

    let task = tokio::spawn(async move {
        let mut server = ServerFuture::new(handler);
        server.register_socket(socket);
        if let Err(e) = server.block_until_done().await {
            error!(error = %e, "UDP DNS server error");
        }
    });

    info!(bind_address = %local_addr, "DNS server listening (UDP)");

    Ok(ServerHandle { local_addr, task })
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
