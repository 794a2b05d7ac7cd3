use crate::config;
use anyhow::Context;
use std::time::Duration;

/// Dial the cluster of the context, returning an alerts Client over the
/// established Channel. Fails if the cluster can't be reached.
pub async fn connect(context: &config::Context) -> anyhow::Result<alerts::Client> {
    let scheme = if context.secure { "https" } else { "http" };
    let endpoint = format!("{scheme}://{}", context.endpoint);

    let mut endpoint = tonic::transport::Endpoint::from_shared(endpoint.clone())
        .with_context(|| format!("invalid cluster endpoint {endpoint:?}"))?
        // Accounts only for TCP connection time, and not the TLS handshake.
        .connect_timeout(Duration::from_secs(10))
        .http2_keep_alive_interval(Duration::from_secs(301))
        .keep_alive_while_idle(true);

    if context.secure {
        endpoint = endpoint
            .tls_config(tls_config(context))
            .context("failed to configure TLS")?;
    }

    let channel = endpoint
        .connect()
        .await
        .with_context(|| format!("failed to connect to {}", context.endpoint))?;

    let mut metadata = proto_openstorage::Metadata::new();
    if let Some(token) = &context.token {
        metadata = metadata
            .with_bearer_token(token)
            .context("context has an invalid token")?;
    }

    Ok(alerts::Client::new(channel, metadata))
}

// A context CA certificate verifies the cluster, or otherwise the system's roots do.
fn tls_config(context: &config::Context) -> tonic::transport::ClientTlsConfig {
    let config = tonic::transport::ClientTlsConfig::new();

    match &context.ca_cert {
        Some(pem) => config.ca_certificate(tonic::transport::Certificate::from_pem(pem)),
        None => config.with_native_roots(),
    }
}
