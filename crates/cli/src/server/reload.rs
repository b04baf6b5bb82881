use apex_ns_application::use_cases::ReloadConfigUseCase;
use std::sync::Arc;
use tracing::info;

/// Reloads `config_path` on every SIGHUP.
#[cfg(unix)]
pub fn spawn_reload_listener(
    reload: Arc<ReloadConfigUseCase>,
    config_path: Option<String>,
    running_bind_addr: String,
) {
    use tokio::signal::unix::{signal, SignalKind};
    use tracing::{error, warn};

    let Some(path) = config_path else {
        info!("No config file in use, SIGHUP reload disabled");
        return;
    };

    tokio::spawn(async move {
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(stream) => stream,
            Err(e) => {
                warn!(error = %e, "Failed to install SIGHUP handler");
                return;
            }
        };

        while hangup.recv().await.is_some() {
            info!(path = %path, "SIGHUP received, reloading configuration");
            match reload.execute(&path).await {
                Ok(config) => {
                    if config.server.dns_bind_addr() != running_bind_addr {
                        warn!(
                            running = %running_bind_addr,
                            configured = %config.server.dns_bind_addr(),
                            "Listener address changes take effect after restart"
                        );
                    }
                }
                Err(e) => error!(error = %e, "Configuration reload failed"),
            }
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_reload_listener(
    _reload: Arc<ReloadConfigUseCase>,
    _config_path: Option<String>,
    _running_bind_addr: String,
) {
    info!("Configuration reload on signal is only supported on unix");
}
