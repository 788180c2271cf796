//! TCP connectivity probe.

use std::future::Future;
use std::io;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::config::Target;
use crate::error::{AcceptanceError, Result};

/// Open a TCP connection to the target, report whether it started, and close it.
///
/// The whole connect (name resolution included) is bounded by `target.timeout`.
/// Nothing is retried.
///
/// # Returns
/// * `Ok(true)` if the connection opened and has a peer
/// * `Ok(false)` if the socket opened but reports no peer
/// * `Err` if the host could not be reached in time
pub async fn probe(target: &Target) -> Result<bool> {
    tracing::debug!(addr = %target, timeout_secs = target.timeout.as_secs(), "Probing");

    let connect = TcpStream::connect((target.host.as_str(), target.port));
    let mut stream = connect_within(target, connect).await?;

    let started = stream.peer_addr().is_ok();

    if let Err(e) = stream.shutdown().await {
        // The peer may already have hung up; the probe result stands.
        tracing::debug!(error = %e, "Shutdown after probe failed");
    }

    tracing::debug!(addr = %target, started, "Probe finished");
    Ok(started)
}

/// Await a pending connect to `target`, giving up after `target.timeout`.
async fn connect_within<F>(target: &Target, connect: F) -> Result<TcpStream>
where
    F: Future<Output = io::Result<TcpStream>>,
{
    match tokio::time::timeout(target.timeout, connect).await {
        Ok(Ok(stream)) => Ok(stream),
        Ok(Err(source)) => Err(AcceptanceError::Connect {
            target: target.to_string(),
            source,
        }),
        Err(_) => Err(AcceptanceError::ConnectTimeout {
            target: target.to_string(),
            timeout: target.timeout,
        }),
    }
}

/// Probe the target and fail unless the connection started.
pub async fn ensure_running(target: &Target) -> Result<()> {
    if probe(target).await? {
        Ok(())
    } else {
        Err(AcceptanceError::NotStarted {
            target: target.to_string(),
        })
    }
}
