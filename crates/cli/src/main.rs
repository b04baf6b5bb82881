use apex_ns_domain::{CliOverrides, Config};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "apex-ns")]
#[command(version)]
#[command(about = "Apex NS - authoritative DNS responder for a single domain")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Domain to answer for, without trailing dot
    #[arg(long)]
    base_domain: Option<String>,

    /// Address every name under the base domain resolves to
    #[arg(long)]
    server_ip: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        base_domain: cli.base_domain.clone(),
        server_ip: cli.server_ip.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides.clone())?;

    bootstrap::init_logging(&config);

    info!("Starting Apex NS v{}", env!("CARGO_PKG_VERSION"));

    let dns_addr = config.server.dns_bind_addr();
    let config_arc = Arc::new(RwLock::new(config));

    let dns_services = di::DnsServices::new(config_arc, cli_overrides).await?;

    // Bind failure is fatal: the error propagates out of main.
    let dns_server = server::start_dns_server(&dns_services.nameserver, dns_addr.clone()).await?;

    let config_path = cli.config.clone().or_else(Config::get_config_path);
    server::spawn_reload_listener(dns_services.reload_config.clone(), config_path, dns_addr);

    tokio::signal::ctrl_c().await?;

    info!("Shutting down");
    dns_server.shutdown();

    Ok(())
}
