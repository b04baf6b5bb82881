use apex_ns_infrastructure::dns::{Nameserver, ServerHandle};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

pub async fn start_dns_server(
    nameserver: &Arc<Nameserver>,
    bind_addr: String,
) -> anyhow::Result<ServerHandle> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    info!(bind_address = %socket_addr, serial = nameserver.serial(), "Starting DNS server");

    match nameserver.start(socket_addr).await {
        Ok(handle) => Ok(handle),
        Err(e) => {
            error!(error = %e, "Failed to start nameserver on port {}", socket_addr.port());
            Err(e.into())
        }
    }
}
