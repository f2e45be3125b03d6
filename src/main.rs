//! Host rotator command line client.
//!
//! Sends requests through the full client stack so the rotation behaviour
//! can be watched against real upstreams:
//!
//! ```text
//! request ─▶ TraceLayer ─▶ HostRotatorLayer ─▶ Timeout ─▶ hyper client ─▶ host
//! ```
//!
//! ```text
//! host-rotator --hosts http://a.internal,http://b.internal -n 5 /status
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use clap::Parser;
use http::{Method, Request};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tower::{BoxError, Service, ServiceBuilder, ServiceExt};
use tower_http::trace::TraceLayer;

use host_rotator::config::{load_config, HostList, RotatorConfig};
use host_rotator::observability::init_logging;
use host_rotator::{HostRotator, HostRotatorLayer};

#[derive(Parser)]
#[command(name = "host-rotator")]
#[command(about = "Send HTTP requests through a sticky, failover-aware host pool", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma separated hosts, overrides the configuration file
    #[arg(long)]
    hosts: Option<String>,

    /// Number of requests to send
    #[arg(short = 'n', long, default_value_t = 1)]
    requests: u32,

    /// Request method
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Path and query sent to every host
    #[arg(default_value = "/")]
    path: String,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RotatorConfig::default(),
    };
    if let Some(hosts) = &cli.hosts {
        config.hosts = HostList::from_entries([hosts]);
    }

    init_logging(&config.observability.log_level)?;

    let rotator = Arc::new(HostRotator::from_config(&config)?);
    let method: Method = cli.method.parse()?;

    tracing::info!(
        hosts = config.hosts.len(),
        connect_timeout_secs = config.timeouts.connect_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let mut tcp = HttpConnector::new();
    tcp.set_connect_timeout(Some(Duration::from_secs(config.timeouts.connect_secs)));
    tcp.enforce_http(false);
    let connector = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(tcp);
    let client: Client<_, Body> = Client::builder(TokioExecutor::new()).build(connector);

    let mut service = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(HostRotatorLayer::new(rotator.clone()))
        .timeout(Duration::from_secs(config.timeouts.request_secs))
        .service(client);

    for n in 1..=cli.requests {
        let request = Request::builder()
            .method(method.clone())
            .uri(cli.path.as_str())
            .body(Body::empty())?;
        let host = rotator.current_host();

        match service.ready().await?.call(request).await {
            Ok(response) => {
                tracing::debug!(request = n, host = %host, status = %response.status(), "Response received");
                println!("{:>4}  {}  {}", n, host, response.status());
            }
            Err(e) => {
                tracing::debug!(request = n, host = %host, error = %e, "Request failed");
                println!("{:>4}  {}  error: {}", n, host, e);
            }
        }
    }

    Ok(())
}
