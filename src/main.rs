use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod handler;
mod http;
mod logger;
mod upstream;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing the thread pool from the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Upstream bootstrap runs to completion before the listener starts, so
    // the captured token is never mutated while requests are in flight
    let client = bootstrap_upstream(&cfg).await;
    let state = Arc::new(config::AppState::new(cfg, Arc::new(client)));

    // A bind failure is the one fatal startup error
    let listener = create_reusable_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;

    logger::log_server_start(&addr, &state.config);
    run_server_loop(listener, state).await
}

/// Authenticate, declare the collection, and seed sample records
///
/// Every failure here is absorbed: a failed authentication leaves the
/// gateway in read-only mode (the homepage still works, data endpoints
/// surface upstream errors), and schema or seeding failures are logged
/// without aborting startup.
async fn bootstrap_upstream(cfg: &config::Config) -> upstream::UpstreamClient {
    let mut client = upstream::UpstreamClient::new(&cfg.upstream);

    let auth = client
        .authenticate(&cfg.upstream.admin_identity, &cfg.upstream.admin_secret)
        .await;
    match auth {
        Ok(()) => logger::log_auth_success(&cfg.upstream.base_url),
        Err(e) => logger::log_auth_degraded(&cfg.upstream.base_url, &e.to_string()),
    }

    // Schema declaration and seeding need the token; without it the gateway
    // serves the homepage and lets data endpoints surface upstream errors
    if !client.is_authenticated() {
        return client;
    }

    match client.ensure_collection().await {
        Ok(upstream::SchemaOutcome::Created) => {
            logger::log_collection_created(&cfg.upstream.collection);
        }
        Ok(upstream::SchemaOutcome::AlreadyExists) => {
            logger::log_collection_exists(&cfg.upstream.collection);
        }
        Err(e) => logger::log_schema_error(&cfg.upstream.collection, &e.to_string()),
    }

    let samples = upstream::sample_tools();
    let accepted = client.seed_samples(&samples).await;
    logger::log_seed_summary(accepted, samples.len());

    client
}

/// Accept connections until the process exits
async fn run_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                handle_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single connection on a spawned task
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<config::AppState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Create a `TcpListener` with `SO_REUSEPORT` and `SO_REUSEADDR` enabled
///
/// Allows rebinding the address promptly after a restart without waiting out
/// sockets in TIME_WAIT.
fn create_reusable_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
