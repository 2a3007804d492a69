use std::{env, net::SocketAddr};

use anyhow::Context;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Bind address from `SERVER_ADDRESS`, falling back to [`DEFAULT_SERVER_ADDRESS`].
pub fn server_address() -> anyhow::Result<SocketAddr> {
    let addr = env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string());
    addr.parse()
        .with_context(|| format!("SERVER_ADDRESS `{}` is not a socket address", addr))
}

/// Debug by default, `RUST_LOG` overrides. Hyper internals are kept at info.
pub fn log_filter() -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()?
        .add_directive("hyper=info".parse()?);
    Ok(filter)
}
