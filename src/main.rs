use std::net::{IpAddr, SocketAddr};
use std::process::exit;
use log::{error, info};
use tokio::runtime::Builder;
use jdwp_proxy::config::structs::configuration::Configuration;
use jdwp_proxy::logging::setup_logging;
use jdwp_proxy::proxy::proxy::proxy_service;
use jdwp_proxy::proxy::structs::session_options::SessionOptions;
use jdwp_proxy::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse_args();

    let mut config = match Configuration::load_from_file(args.config.as_deref(), args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone();
    }
    if let Some(report_format) = args.report_format {
        config.report.format = report_format;
    }

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let bind_ip: IpAddr = match config.proxy.bind_address.parse() {
        Ok(ip) => ip,
        Err(e) => {
            error!("Invalid bind address {}: {e}", config.proxy.bind_address);
            exit(101);
        }
    };

    let options = SessionOptions {
        cache_enabled: !args.nocache,
        max_frame_length: config.proxy.max_frame_length,
        report_format: config.report.format,
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (proxy_tx, proxy_rx) = tokio::sync::watch::channel(false);
            let proxy_handle = proxy_service(
                SocketAddr::new(bind_ip, args.listen_port),
                args.backend_host.clone(),
                args.backend_port,
                options,
                config.proxy.backlog,
                config.proxy.reuse_address,
                proxy_rx
            ).await;

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            let _ = proxy_tx.send(true);
            if let Err(e) = proxy_handle.await {
                error!("Errors happened on shutting down the listener: {e}");
            }

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
